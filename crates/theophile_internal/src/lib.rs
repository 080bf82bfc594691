//! # Theophile Internal Library
//!
//! Re-exports the core Theophile crates for convenience.

/// Attribute configuration parsing.
pub use theophile_config;

/// Lifecycle hooks and execution.
pub use theophile_hooks;

/// Core infrastructure plugins.
pub use theophile_core_plugins;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use theophile_config::prelude::*;
    pub use theophile_core_plugins::{TracingFormat, TracingPlugin};
    pub use theophile_hooks::prelude::*;
}
