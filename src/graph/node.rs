//! Module graph nodes
//!
//! A node represents one browser-loaded module known to the dev server's
//! dependency graph. Some nodes are virtual (for example a server-side
//! template registered as a dependency root by a CSS scanner) and have no
//! file on disk; those are never hot-updated themselves but still propagate
//! invalidation to their importers.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a module in the graph.
///
/// Stable across invalidations: invalidating a node marks its cached output
/// stale but never reassigns its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(u64);

impl ModuleId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw id value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// One module in the dev server's dependency graph.
///
/// Owned and mutated exclusively by [`ModuleGraph`](super::ModuleGraph); the
/// hot-update pipeline only reads nodes and requests invalidation through the
/// graph.
#[derive(Debug)]
pub struct ModuleNode {
    id: ModuleId,
    /// URL the browser loads this module under.
    url: String,
    /// On-disk source file, if any. Virtual nodes have none.
    file: Option<PathBuf>,
    /// Modules that import this one (back-references, insertion order kept).
    importers: Vec<ModuleId>,
    /// Modules this one imports.
    imported: Vec<ModuleId>,
    /// Timestamp of the most recent invalidation, if any.
    invalidated_at: Option<u64>,
}

impl ModuleNode {
    pub(crate) fn new(id: ModuleId, url: String, file: Option<PathBuf>) -> Self {
        Self {
            id,
            url,
            file,
            importers: Vec::new(),
            imported: Vec::new(),
            invalidated_at: None,
        }
    }

    /// Get the node's id.
    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// URL the browser loads this module under.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// On-disk source file. `None` for virtual nodes.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Modules that import this one.
    pub fn importers(&self) -> &[ModuleId] {
        &self.importers
    }

    /// Modules this one imports.
    pub fn imported(&self) -> &[ModuleId] {
        &self.imported
    }

    /// Timestamp of the most recent invalidation, if any.
    pub fn invalidated_at(&self) -> Option<u64> {
        self.invalidated_at
    }

    pub(crate) fn add_importer(&mut self, id: ModuleId) {
        if !self.importers.contains(&id) {
            self.importers.push(id);
        }
    }

    pub(crate) fn add_imported(&mut self, id: ModuleId) {
        if !self.imported.contains(&id) {
            self.imported.push(id);
        }
    }

    pub(crate) fn mark_invalidated(&mut self, timestamp: u64) {
        self.invalidated_at = Some(timestamp);
    }
}
