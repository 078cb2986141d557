//! Module dependency graph
//!
//! Tracks which browser-loaded modules import which others and owns the one
//! mutation the hot-update pipeline is allowed to request: transitive,
//! non-destructive invalidation.
//!
//! Edges are kept in both directions. Forward edges (`imported`) describe
//! what a module pulls in; back edges (`importers`) are what invalidation
//! walks, since a change to a module makes everything that imports it stale.
//! Invalidation collects visited nodes into an [`InvalidatedSet`] supplied by
//! the caller, one fresh accumulator per change event, so the caller reads
//! back exactly the nodes affected by that event.

mod node;

pub use node::{ModuleId, ModuleNode};

use std::path::PathBuf;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// Insertion-ordered, deduplicated accumulator of invalidated modules.
///
/// Built fresh per change event. Membership is tracked separately from order
/// so a node reachable through several import paths is recorded exactly once,
/// and the eventual update batch follows traversal order rather than hash
/// order.
#[derive(Debug, Default)]
pub struct InvalidatedSet {
    order: Vec<ModuleId>,
    seen: FxHashSet<ModuleId>,
}

impl InvalidatedSet {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an id, returning `false` if it was already present.
    pub fn insert(&mut self, id: ModuleId) -> bool {
        if self.seen.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    /// Whether the id has already been recorded.
    pub fn contains(&self, id: ModuleId) -> bool {
        self.seen.contains(&id)
    }

    /// Number of invalidated modules.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no module was invalidated.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in insertion (traversal) order.
    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.order.iter().copied()
    }
}

/// The dev server's in-memory record of loaded modules and their imports.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    modules: FxHashMap<ModuleId, ModuleNode>,
    by_url: FxHashMap<String, ModuleId>,
}

impl ModuleGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its public URL.
    ///
    /// Registering an already-known URL returns the existing node's id; the
    /// node keeps its identity for as long as it lives in the graph.
    pub fn register(&mut self, url: impl Into<String>, file: Option<PathBuf>) -> ModuleId {
        let url = url.into();
        if let Some(&id) = self.by_url.get(&url) {
            return id;
        }
        let id = ModuleId::next();
        self.by_url.insert(url.clone(), id);
        self.modules.insert(id, ModuleNode::new(id, url, file));
        id
    }

    /// Record that `importer` imports `imported`, maintaining both edge
    /// directions. Unknown ids are ignored.
    pub fn add_import(&mut self, importer: ModuleId, imported: ModuleId) {
        if let Some(node) = self.modules.get_mut(&importer) {
            node.add_imported(imported);
        }
        if let Some(node) = self.modules.get_mut(&imported) {
            node.add_importer(importer);
        }
    }

    /// Get a node by id.
    pub fn get(&self, id: ModuleId) -> Option<&ModuleNode> {
        self.modules.get(&id)
    }

    /// Look up a module id by its public URL.
    pub fn lookup_url(&self, url: &str) -> Option<ModuleId> {
        self.by_url.get(url).copied()
    }

    /// Number of modules in the graph.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the graph holds no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Invalidate a module and, transitively, every module that imports it.
    ///
    /// Each visited node is stamped with `timestamp` and inserted into the
    /// accumulator. A node already present in the accumulator is not visited
    /// again, which both deduplicates shared importers and terminates import
    /// cycles. A module with no importers yields itself as the only member.
    /// Ids not present in the graph are skipped.
    ///
    /// Non-destructive: the node and its edges stay in the graph; only its
    /// invalidation timestamp moves.
    pub fn invalidate_module(
        &mut self,
        id: ModuleId,
        invalidated: &mut InvalidatedSet,
        timestamp: u64,
    ) {
        if invalidated.contains(id) {
            return;
        }
        let importers = match self.modules.get_mut(&id) {
            Some(node) => {
                node.mark_invalidated(timestamp);
                node.importers().to_vec()
            }
            None => {
                trace!(id = id.raw(), "skipping invalidation of unknown module");
                return;
            }
        };
        invalidated.insert(id);

        for importer in importers {
            self.invalidate_module(importer, invalidated, timestamp);
        }
    }
}
