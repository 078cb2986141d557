//! Update classification
//!
//! Maps a changed module's file path to the kind of hot update the client
//! can apply, or to "not hot-updatable" for everything else.

use std::fmt;

use serde::Serialize;

/// The kind of hot update a module can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateKind {
    /// Stylesheet swap in place, without losing page state.
    #[serde(rename = "css-update")]
    CssUpdate,
    /// Script module re-execution through the client's HMR runtime.
    #[serde(rename = "js-update")]
    JsUpdate,
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateKind::CssUpdate => write!(f, "css-update"),
            UpdateKind::JsUpdate => write!(f, "js-update"),
        }
    }
}

/// Classify a file path by the hot update it supports.
///
/// Suffix checks are exact and case-sensitive, stylesheet before script, so
/// preprocessor sources like `app.scss` still classify as style updates.
/// `None` means the module cannot be hot-updated: it is silently left out of
/// the batch, neither an error nor a reload trigger by itself.
pub fn hot_update_kind(path: &str) -> Option<UpdateKind> {
    if path.ends_with("css") {
        Some(UpdateKind::CssUpdate)
    } else if path.ends_with("js") {
        Some(UpdateKind::JsUpdate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheets_classify_as_css_updates() {
        assert_eq!(hot_update_kind("assets/app.css"), Some(UpdateKind::CssUpdate));
        assert_eq!(hot_update_kind("assets/app.scss"), Some(UpdateKind::CssUpdate));
    }

    #[test]
    fn scripts_classify_as_js_updates() {
        assert_eq!(hot_update_kind("assets/app.js"), Some(UpdateKind::JsUpdate));
        assert_eq!(hot_update_kind("assets/chart.mjs"), Some(UpdateKind::JsUpdate));
    }

    #[test]
    fn templates_and_everything_else_are_not_hot_updatable() {
        assert_eq!(hot_update_kind("lib/app_web/page.heex"), None);
        assert_eq!(hot_update_kind("lib/app_web/live/page.ex"), None);
        assert_eq!(hot_update_kind("assets/logo.svg"), None);
        assert_eq!(hot_update_kind(""), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(hot_update_kind("assets/APP.CSS"), None);
        assert_eq!(hot_update_kind("assets/app.JS"), None);
    }

    #[test]
    fn classification_is_idempotent() {
        let path = "assets/app.css";
        assert_eq!(hot_update_kind(path), hot_update_kind(path));
    }
}
