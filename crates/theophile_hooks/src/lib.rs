//! Phase-sequenced lifecycle hooks for Theophile.
//!
//! `theophile_hooks` runs a fixed sequence of lifecycle phases over a
//! component tree:
//!
//! - [`Phase`] - the eight lifecycle phases, in execution order
//! - [`HookRegistry`] - per-phase hook lists with registration and invocation
//! - [`LifecycleExecutor`] - runs all phases in order, one at a time
//! - [`Plugin`] - reusable bundles of hooks
//!
//! Within a phase, hooks start in registration order and run concurrently.
//! A phase finishes only when all of its hooks have, and the next phase never
//! starts before that.
//!
//! # Example
//!
//! ```
//! use theophile_hooks::{HookRegistry, Phase};
//!
//! struct Tree {
//!     nodes: usize,
//! }
//!
//! # futures::executor::block_on(async {
//! let hooks = HookRegistry::<Tree>::new();
//! hooks.created(|tree: &Tree| {
//!     Box::pin(async move {
//!         tracing::debug!(nodes = tree.nodes, "tree created");
//!         Ok(())
//!     })
//! });
//!
//! let result = hooks.exec(&Tree { nodes: 3 }).await.unwrap();
//! assert_eq!(result.hooks_invoked, 1);
//! # });
//! ```

use core::future::Future;
use core::pin::Pin;

/// Hook registration and per-phase invocation.
pub mod api;

/// Hook errors.
pub mod error;

/// Lifecycle execution engine.
pub mod executor;

/// Lifecycle phases.
pub mod phase;

/// Plugin trait for bundling hooks.
pub mod plugin;

/// A boxed future that is Send.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub use api::{BoxedHook, HookRegistry};
pub use error::{HookError, HookResult};
pub use executor::{ExecutionResult, LifecycleExecutor};
pub use phase::Phase;
pub use plugin::{Plugin, PluginId};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::BoxFuture;
    pub use crate::api::{BoxedHook, HookRegistry};
    pub use crate::error::{HookError, HookResult};
    pub use crate::executor::{ExecutionResult, LifecycleExecutor};
    pub use crate::phase::Phase;
    pub use crate::plugin::{Plugin, PluginId};
}
