//! Plugin configuration

use serde::Deserialize;

/// Configuration for the hot-update override.
///
/// Hosts typically deserialize this from their own config file; the builder
/// methods cover programmatic setup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HotUpdateConfig {
    /// Regular expression selecting the server-side source files whose
    /// changes this plugin takes over. Absent means the plugin never
    /// intervenes and the host's default reload behavior applies to every
    /// change.
    pub pattern: Option<String>,
}

impl HotUpdateConfig {
    /// Empty configuration: the override pipeline stays disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file pattern. Compiled once at plugin construction.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}
