//! Hot-update coordination
//!
//! Runs the per-event pipeline: gate on the configured pattern, expand the
//! directly-changed modules into the full invalidated set, build the update
//! batch, send it, and tell the host whether to skip its default full-reload
//! handling.

use tracing::{debug, trace};

use crate::config::HotUpdateConfig;
use crate::error::Result;
use crate::filter::PatternFilter;
use crate::graph::{InvalidatedSet, ModuleGraph, ModuleId};
use crate::transport::UpdateTransport;
use crate::update::{build_updates, UpdateMessage};

/// One detected file change, as delivered by the host's watcher.
///
/// Produced once per change and consumed once; the module list is in host
/// order and the timestamp is shared by every update in the resulting batch.
#[derive(Debug, Clone)]
pub struct HotUpdateContext<'a> {
    /// Path of the file that changed on disk.
    pub file: &'a str,
    /// Modules the host already resolved as directly affected.
    pub modules: &'a [ModuleId],
    /// Logical timestamp of the change event.
    pub timestamp: u64,
}

/// What the host should do after the callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotUpdateOutcome {
    /// The pipeline took over: skip the default full-reload handling and let
    /// the framework's own reload channel react to the page-level change.
    Handled,
    /// The event was out of scope: apply default behavior unmodified.
    Deferred,
}

/// Orchestrates filter, traversal, classification, and message building for
/// each change event.
#[derive(Debug, Clone)]
pub struct HotUpdateCoordinator {
    filter: PatternFilter,
}

impl HotUpdateCoordinator {
    /// Build a coordinator, compiling the configured pattern.
    pub fn new(config: &HotUpdateConfig) -> Result<Self> {
        Ok(Self {
            filter: PatternFilter::new(config.pattern.as_deref())?,
        })
    }

    /// Handle one change event, running to completion.
    ///
    /// Out-of-scope events return [`HotUpdateOutcome::Deferred`] without
    /// touching the graph or the transport. In-scope events always complete
    /// the pipeline and always send the batch, even when it is empty — an
    /// empty batch tells the client that no module requires a full reload.
    /// The only fallible step is the send; by the time it runs, the graph
    /// invalidations have already been applied.
    pub fn handle_hot_update(
        &self,
        ctx: HotUpdateContext<'_>,
        graph: &mut ModuleGraph,
        transport: &mut dyn UpdateTransport,
    ) -> Result<HotUpdateOutcome> {
        if !self.filter.matches(ctx.file) {
            trace!(file = ctx.file, "out of scope, deferring to default reload");
            return Ok(HotUpdateOutcome::Deferred);
        }

        // Invalidate everything downstream so the next request recomputes it.
        let mut invalidated = InvalidatedSet::new();
        for &id in ctx.modules {
            graph.invalidate_module(id, &mut invalidated, ctx.timestamp);
        }

        let updates = build_updates(graph, &invalidated, ctx.timestamp);
        debug!(
            file = ctx.file,
            invalidated = invalidated.len(),
            updates = updates.len(),
            "sending hot-update batch"
        );

        transport.send(&UpdateMessage::Update { updates })?;
        Ok(HotUpdateOutcome::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingTransport {
        messages: Vec<UpdateMessage>,
    }

    impl UpdateTransport for RecordingTransport {
        fn send(&mut self, message: &UpdateMessage) -> Result<()> {
            self.messages.push(message.clone());
            Ok(())
        }
    }

    fn coordinator(pattern: &str) -> HotUpdateCoordinator {
        HotUpdateCoordinator::new(&HotUpdateConfig::new().with_pattern(pattern)).unwrap()
    }

    #[test]
    fn rejected_event_touches_nothing() {
        let coordinator = coordinator(r"\.heex$");
        let mut graph = ModuleGraph::new();
        let css = graph.register("/app.css", Some(PathBuf::from("app.css")));
        let mut transport = RecordingTransport::default();

        let outcome = coordinator
            .handle_hot_update(
                HotUpdateContext {
                    file: "assets/app.css",
                    modules: &[css],
                    timestamp: 1,
                },
                &mut graph,
                &mut transport,
            )
            .unwrap();

        assert_eq!(outcome, HotUpdateOutcome::Deferred);
        assert!(transport.messages.is_empty());
        assert_eq!(graph.get(css).unwrap().invalidated_at(), None);
    }

    #[test]
    fn no_configured_pattern_defers_every_event() {
        let coordinator = HotUpdateCoordinator::new(&HotUpdateConfig::new()).unwrap();
        let mut graph = ModuleGraph::new();
        let mut transport = RecordingTransport::default();

        let outcome = coordinator
            .handle_hot_update(
                HotUpdateContext {
                    file: "lib/page.heex",
                    modules: &[],
                    timestamp: 1,
                },
                &mut graph,
                &mut transport,
            )
            .unwrap();

        assert_eq!(outcome, HotUpdateOutcome::Deferred);
        assert!(transport.messages.is_empty());
    }

    #[test]
    fn transport_error_propagates_after_invalidation_applied() {
        struct FailingTransport;

        impl UpdateTransport for FailingTransport {
            fn send(&mut self, _message: &UpdateMessage) -> Result<()> {
                Err(crate::error::Error::Transport(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "client went away",
                )))
            }
        }

        let coordinator = coordinator(r"\.heex$");
        let mut graph = ModuleGraph::new();
        let template = graph.register("/page.heex", Some(PathBuf::from("lib/page.heex")));
        let css = graph.register("/app.css", Some(PathBuf::from("assets/app.css")));
        graph.add_import(css, template);

        let err = coordinator
            .handle_hot_update(
                HotUpdateContext {
                    file: "lib/page.heex",
                    modules: &[template],
                    timestamp: 6,
                },
                &mut graph,
                &mut FailingTransport,
            )
            .unwrap_err();

        assert!(matches!(err, crate::error::Error::Transport(_)));
        // The traversal ran to completion before the send failed.
        assert_eq!(graph.get(template).unwrap().invalidated_at(), Some(6));
        assert_eq!(graph.get(css).unwrap().invalidated_at(), Some(6));
    }

    #[test]
    fn matching_event_with_no_updatable_modules_still_sends_empty_batch() {
        let coordinator = coordinator(r"\.heex$");
        let mut graph = ModuleGraph::new();
        let template = graph.register("virtual:page.heex", None);
        let mut transport = RecordingTransport::default();

        let outcome = coordinator
            .handle_hot_update(
                HotUpdateContext {
                    file: "lib/page.heex",
                    modules: &[template],
                    timestamp: 4,
                },
                &mut graph,
                &mut transport,
            )
            .unwrap();

        assert_eq!(outcome, HotUpdateOutcome::Handled);
        assert_eq!(
            transport.messages,
            vec![UpdateMessage::Update { updates: vec![] }]
        );
    }
}
