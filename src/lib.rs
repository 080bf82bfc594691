//! Lifecycle orchestration and attribute configuration for component templates.
//!

pub use theophile_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use theophile_internal::prelude::*;
}
