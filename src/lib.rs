//! Rekindle: a selective hot-update decision layer for dev servers
//!
//! When a dev server's output is consumed by a server-rendered templating
//! framework, a change to a server-side template usually triggers a full
//! browser reload — even though the framework has its own, finer-grained
//! reload channel. Rekindle intercepts that decision. For changed files
//! matching a configured pattern it suppresses the default reload, walks the
//! module graph to find every already-loaded module the change affects,
//! classifies each one, pushes a minimal ordered hot-update batch over the
//! live-update transport, and signals "handled" so the host skips its own
//! reload logic and the framework channel takes it from there.
//!
//! # Features
//!
//! - **Pattern-gated**: without a configured pattern (or on a non-matching
//!   path) the host's default behavior is untouched
//! - **Cycle-safe invalidation**: transitive importer traversal visits each
//!   module exactly once, even through import cycles
//! - **Minimal batches**: virtual modules and non-hot-updatable files are
//!   silently excluded; an empty batch is still sent to suppress the reload
//! - **Narrow seams**: the live-update transport is a one-method trait, so
//!   any socket layer plugs in
//!
//! # Quick Start
//!
//! ```
//! use rekindle::{
//!     HotUpdateConfig, HotUpdateContext, HotUpdateOutcome, HotUpdatePlugin,
//!     JsonLineTransport, ModuleGraph,
//! };
//!
//! fn main() -> rekindle::Result<()> {
//!     let plugin = HotUpdatePlugin::new(HotUpdateConfig::new().with_pattern(r"\.heex$"))?;
//!
//!     // Normally the host dev server owns the graph; built here by hand.
//!     let mut graph = ModuleGraph::new();
//!     let css = graph.register("/assets/app.css", Some("assets/app.css".into()));
//!     let template = graph.register("/lib/page.heex", Some("lib/page.heex".into()));
//!     graph.add_import(css, template);
//!
//!     let mut transport = JsonLineTransport::new(Vec::new());
//!     let outcome = plugin.handle_hot_update(
//!         HotUpdateContext { file: "lib/page.heex", modules: &[template], timestamp: 1 },
//!         &mut graph,
//!         &mut transport,
//!     )?;
//!
//!     assert_eq!(outcome, HotUpdateOutcome::Handled);
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! One change event flows: [`filter`] (gate) → [`graph`] (expand) →
//! [`classify`] (per module) → [`update`] (assemble) → [`transport`] (send),
//! orchestrated by [`coordinator`] and packaged by [`plugin`].

pub mod classify;
pub mod config;
pub mod coordinator;
pub mod filter;
pub mod graph;
pub mod plugin;
pub mod stdin_watch;
pub mod transport;
pub mod update;

mod error;

pub use classify::{hot_update_kind, UpdateKind};
pub use config::HotUpdateConfig;
pub use coordinator::{HotUpdateContext, HotUpdateCoordinator, HotUpdateOutcome};
pub use error::{Error, Result};
pub use filter::PatternFilter;
pub use graph::{InvalidatedSet, ModuleGraph, ModuleId, ModuleNode};
pub use plugin::HotUpdatePlugin;
pub use transport::{JsonLineTransport, UpdateTransport};
pub use update::{build_updates, HotUpdate, UpdateMessage};

/// Rekindle version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
