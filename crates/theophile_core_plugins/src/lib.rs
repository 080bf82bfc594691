//! Core infrastructure plugins for Theophile.
//!
//! - [`TracingPlugin`] - Logging and observability via the `tracing` crate
//!
//! # Example
//!
//! ```
//! use theophile_core_plugins::TracingPlugin;
//! use theophile_hooks::HookRegistry;
//! use tracing::Level;
//!
//! let hooks = HookRegistry::<()>::new();
//! hooks
//!     .add_plugin(TracingPlugin::default().with_level(Level::DEBUG))
//!     .unwrap();
//! ```

mod tracing_plugin;

pub use tracing_plugin::{TracingConfig, TracingFormat, TracingPlugin};
