//! Update message building
//!
//! Converts the set of invalidated modules into the ordered batch of update
//! descriptors pushed to the client.

use serde::Serialize;

use crate::classify::{hot_update_kind, UpdateKind};
use crate::graph::{InvalidatedSet, ModuleGraph};

/// One hot-update descriptor sent to the client.
///
/// Immutable once built. `path` and `accepted_path` are both the module's
/// public URL; the client applies the update at the module that serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotUpdate {
    /// What the client should do with the module.
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    /// Public URL of the module to update.
    pub path: String,
    /// URL at which the update is accepted. Always equal to `path` here.
    pub accepted_path: String,
    /// Logical timestamp shared by every update in the batch.
    pub timestamp: u64,
}

/// Wire message pushed over the live-update transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UpdateMessage {
    /// Granular hot-update batch. An empty batch is meaningful: it tells the
    /// client that no module requires a full reload.
    Update {
        /// The ordered update batch.
        updates: Vec<HotUpdate>,
    },
}

/// Build the ordered update batch for one change event.
///
/// Walks the accumulator in traversal order. Virtual modules (no file on
/// disk) and modules whose file classifies as not hot-updatable are skipped;
/// every remaining module yields exactly one descriptor carrying the shared
/// timestamp. An empty result is a valid outcome.
pub fn build_updates(
    graph: &ModuleGraph,
    invalidated: &InvalidatedSet,
    timestamp: u64,
) -> Vec<HotUpdate> {
    invalidated
        .iter()
        .filter_map(|id| {
            let node = graph.get(id)?;
            let file = node.file()?;
            let kind = hot_update_kind(&file.to_string_lossy())?;
            Some(HotUpdate {
                kind,
                path: node.url().to_string(),
                accepted_path: node.url().to_string(),
                timestamp,
            })
        })
        .collect()
}
