//! Plugins bundle hook registrations.
//!
//! A plugin is a reusable set of hooks installed into a registry in one call.
//! Each plugin type can be installed at most once per registry.
//!
//! # Example
//!
//! ```
//! use theophile_hooks::{HookRegistry, Phase, Plugin};
//!
//! struct Announce;
//!
//! impl Plugin<String> for Announce {
//!     fn build(&self, registry: &HookRegistry<String>) {
//!         registry.observe(Phase::Mounted, |root: &String| {
//!             tracing::info!(root = %root, "mounted");
//!         });
//!     }
//! }
//!
//! let registry = HookRegistry::<String>::new();
//! registry.add_plugin(Announce).unwrap();
//! assert!(registry.has_plugin::<Announce>());
//! assert!(registry.add_plugin(Announce).is_err());
//! ```

use core::any::TypeId;

use crate::api::HookRegistry;

// ─────────────────────────────────────────────────────────────────────────────
// PluginId
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a plugin type, used for duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PluginId {
    type_id: TypeId,
    type_name: &'static str,
}

impl PluginId {
    /// Creates a `PluginId` for the given plugin type.
    #[must_use]
    pub fn of<P: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<P>(),
            type_name: core::any::type_name::<P>(),
        }
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type name for debugging.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A bundle of hooks for contexts of type `C`.
pub trait Plugin<C>: Send + Sync + 'static {
    /// Registers the plugin's hooks.
    ///
    /// Called exactly once, by [`HookRegistry::add_plugin`].
    fn build(&self, registry: &HookRegistry<C>);

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
