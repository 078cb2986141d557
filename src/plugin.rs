//! Plugin packaging
//!
//! Bundles the pipeline into the shape a host dev server registers: a name,
//! a one-time server-configuration hook, and the hot-update callback.

use crate::config::HotUpdateConfig;
use crate::coordinator::{HotUpdateContext, HotUpdateCoordinator, HotUpdateOutcome};
use crate::error::Result;
use crate::graph::ModuleGraph;
use crate::stdin_watch;
use crate::transport::UpdateTransport;

/// The packaged hot-update plugin.
#[derive(Debug, Clone)]
pub struct HotUpdatePlugin {
    coordinator: HotUpdateCoordinator,
}

impl HotUpdatePlugin {
    /// Build the plugin, compiling the configured pattern.
    pub fn new(config: HotUpdateConfig) -> Result<Self> {
        Ok(Self {
            coordinator: HotUpdateCoordinator::new(&config)?,
        })
    }

    /// Stable identifier the host registers this plugin under.
    pub fn name(&self) -> &'static str {
        "rekindle"
    }

    /// One-time server setup.
    ///
    /// Keeps stdin drained so a host run as a managed subprocess observes EOF
    /// when its controlling process closes the stream, and runs the host's
    /// shutdown hook at that point instead of hanging. Idempotent; only the
    /// first call process-wide installs anything and returns `true`, later
    /// calls drop their hook and return `false`.
    pub fn configure_server<F>(&self, on_host_shutdown: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        stdin_watch::on_stdin_close(on_host_shutdown)
    }

    /// The hot-update callback the host invokes once per detected change.
    ///
    /// Returns [`HotUpdateOutcome::Handled`] when the pipeline took over the
    /// event (host must skip its default full reload) and
    /// [`HotUpdateOutcome::Deferred`] when the event was out of scope.
    pub fn handle_hot_update(
        &self,
        ctx: HotUpdateContext<'_>,
        graph: &mut ModuleGraph,
        transport: &mut dyn UpdateTransport,
    ) -> Result<HotUpdateOutcome> {
        self.coordinator.handle_hot_update(ctx, graph, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn invalid_pattern_fails_construction() {
        let err = HotUpdatePlugin::new(HotUpdateConfig::new().with_pattern("[")).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn plugin_reports_its_registration_name() {
        let plugin = HotUpdatePlugin::new(HotUpdateConfig::new()).unwrap();
        assert_eq!(plugin.name(), "rekindle");
    }
}
