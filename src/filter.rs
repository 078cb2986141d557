//! Pattern filter
//!
//! Pure predicate deciding whether a changed-file event is in scope for the
//! override pipeline.

use regex::Regex;

use crate::error::{Error, Result};

/// Gate in front of the hot-update pipeline.
///
/// With no configured pattern the whole override is disabled and every path
/// is out of scope, leaving the host's default reload behavior untouched.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    pattern: Option<Regex>,
}

impl PatternFilter {
    /// Compile a filter from an optional pattern string.
    ///
    /// This is the only configuration error the crate can produce; per-event
    /// matching is infallible.
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let pattern = match pattern {
            Some(p) => Some(Regex::new(p).map_err(|source| Error::InvalidPattern {
                pattern: p.to_string(),
                source,
            })?),
            None => None,
        };
        Ok(Self { pattern })
    }

    /// Whether the changed file is in scope.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(path))
    }
}
