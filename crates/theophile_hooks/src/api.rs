//! Hook registration and per-phase invocation.
//!
//! The [`HookRegistry`] holds one ordered list of callbacks per [`Phase`].
//! Registration takes `&self`, so plugins and other consumers can share one
//! registry. Callbacks are appended and never removed.
//!
//! # Callback Shape
//!
//! A hook receives the execution context by reference and returns a boxed
//! future. Closures are accepted directly:
//!
//! ```
//! use theophile_hooks::{HookRegistry, Phase};
//!
//! struct Page {
//!     title: String,
//! }
//!
//! let hooks = HookRegistry::<Page>::new();
//! hooks.mounted(|page: &Page| {
//!     Box::pin(async move {
//!         tracing::info!(title = %page.title, "page mounted");
//!         Ok(())
//!     })
//! });
//! hooks.observe(Phase::Unmounted, |page: &Page| {
//!     tracing::info!(title = %page.title, "page unmounted");
//! });
//!
//! assert_eq!(hooks.hook_count(Phase::Mounted), 1);
//! assert!(hooks.add_hook("remounted", |_: &Page| Box::pin(async { Ok(()) })).is_err());
//! ```
//!
//! # Snapshot Semantics
//!
//! [`run_phase`](HookRegistry::run_phase) copies the phase's callback list
//! before running it. A hook registered while a phase is running is first
//! invoked the next time that phase runs.

use std::sync::Arc;

use futures::future::try_join_all;
use hashbrown::{HashMap, HashSet};
use parking_lot::RwLock;

use crate::error::{HookError, HookResult};
use crate::executor::{ExecutionResult, LifecycleExecutor};
use crate::phase::Phase;
use crate::plugin::{Plugin, PluginId};
use crate::BoxFuture;

// ─────────────────────────────────────────────────────────────────────────────
// BoxedHook
// ─────────────────────────────────────────────────────────────────────────────

type HookFn<C> = dyn for<'a> Fn(&'a C) -> BoxFuture<'a, HookResult> + Send + Sync;

/// Type-erased hook callback.
///
/// Most users should register closures through [`HookRegistry::add`] or one
/// of the phase shorthands instead of building a `BoxedHook` directly.
pub struct BoxedHook<C> {
    handler: Box<HookFn<C>>,
}

impl<C> BoxedHook<C> {
    /// Wraps a hook callback.
    #[must_use]
    pub fn new<F>(handler: F) -> Self
    where
        F: for<'a> Fn(&'a C) -> BoxFuture<'a, HookResult> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Starts the hook for the given context.
    pub fn invoke<'a>(&self, ctx: &'a C) -> BoxFuture<'a, HookResult> {
        (self.handler)(ctx)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HookEntry
// ─────────────────────────────────────────────────────────────────────────────

/// Entry in the hook registry.
struct HookEntry<C> {
    /// `<phase>#<position>`, used in logs.
    label: String,
    hook: Arc<BoxedHook<C>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// HookRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// Registry of lifecycle hooks for contexts of type `C`.
///
/// # Thread Safety
///
/// Interior mutability via [`RwLock`] allows registration through a shared
/// reference. Locks are never held while hooks run.
pub struct HookRegistry<C> {
    /// Maps each phase to its hooks, in registration order.
    hooks: RwLock<HashMap<Phase, Vec<HookEntry<C>>>>,
    /// Plugins installed so far.
    plugins: RwLock<HashSet<PluginId>>,
}

impl<C> Default for HookRegistry<C> {
    fn default() -> Self {
        Self {
            hooks: RwLock::new(HashMap::new()),
            plugins: RwLock::new(HashSet::new()),
        }
    }
}

impl<C> core::fmt::Debug for HookRegistry<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let hooks = self.hooks.read();
        let mut map = f.debug_map();
        for phase in Phase::ALL {
            map.entry(&phase.name(), &hooks.get(&phase).map_or(0, Vec::len));
        }
        map.finish()
    }
}

impl<C: Sync + 'static> HookRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a hook to `phase`.
    pub fn add<F>(&self, phase: Phase, hook: F)
    where
        F: for<'a> Fn(&'a C) -> BoxFuture<'a, HookResult> + Send + Sync + 'static,
    {
        self.add_boxed(phase, BoxedHook::new(hook));
    }

    /// Appends a hook to the phase called `name`.
    ///
    /// Accepts `before-create` and `beforeCreate` spellings alike. Fails with
    /// [`HookError::UnknownPhase`] for any other name; existing registrations
    /// are left untouched.
    pub fn add_hook<F>(&self, name: &str, hook: F) -> Result<(), HookError>
    where
        F: for<'a> Fn(&'a C) -> BoxFuture<'a, HookResult> + Send + Sync + 'static,
    {
        let phase: Phase = name.parse()?;
        self.add(phase, hook);
        Ok(())
    }

    /// Appends a synchronous observer to `phase`.
    ///
    /// The observer runs when the phase starts its hooks and never fails.
    pub fn observe<F>(&self, phase: Phase, observer: F)
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.add(phase, move |ctx: &C| {
            observer(ctx);
            Box::pin(futures::future::ready(Ok(())))
        });
    }

    /// Appends a pre-built [`BoxedHook`] to `phase`.
    pub fn add_boxed(&self, phase: Phase, hook: BoxedHook<C>) {
        let mut hooks = self.hooks.write();
        let entries = hooks.entry(phase).or_default();
        let label = format!("{phase}#{}", entries.len());

        tracing::trace!(hook = %label, "registering hook");
        entries.push(HookEntry {
            label,
            hook: Arc::new(hook),
        });
    }

    /// Installs a plugin, calling its [`Plugin::build`] once.
    ///
    /// Fails with [`HookError::DuplicatePlugin`] if the same plugin type was
    /// already installed.
    pub fn add_plugin<P: Plugin<C>>(&self, plugin: P) -> Result<(), HookError> {
        let id = PluginId::of::<P>();
        if !self.plugins.write().insert(id) {
            return Err(HookError::DuplicatePlugin(id.type_name()));
        }

        tracing::debug!(plugin = plugin.name(), "installing plugin");
        plugin.build(self);
        Ok(())
    }

    /// Returns `true` if a plugin of type `P` is installed.
    #[must_use]
    pub fn has_plugin<P: 'static>(&self) -> bool {
        self.plugins.read().contains(&PluginId::of::<P>())
    }

    /// Returns the number of hooks registered for `phase`.
    #[must_use]
    pub fn hook_count(&self, phase: Phase) -> usize {
        self.hooks.read().get(&phase).map_or(0, Vec::len)
    }

    /// Returns the total number of hooks across all phases.
    #[must_use]
    pub fn total_hooks(&self) -> usize {
        self.hooks.read().values().map(Vec::len).sum()
    }

    /// Returns `true` if no hooks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_hooks() == 0
    }

    /// Runs every hook of the phase called `name`.
    ///
    /// Fails with [`HookError::UnknownPhase`] before any hook runs if `name`
    /// is not a phase. See [`run_phase`](Self::run_phase).
    pub async fn exec_hook(&self, name: &str, ctx: &C) -> Result<usize, HookError> {
        let phase: Phase = name.parse()?;
        self.run_phase(phase, ctx).await
    }

    /// Runs every hook registered for `phase` and waits for all of them.
    ///
    /// Hooks are started in registration order and then driven concurrently.
    /// The first failure completes the phase with
    /// [`HookError::PhaseFailed`]; hooks still pending are dropped. Returns
    /// the number of hooks run.
    pub async fn run_phase(&self, phase: Phase, ctx: &C) -> Result<usize, HookError> {
        let snapshot: Vec<(String, Arc<BoxedHook<C>>)> = {
            let hooks = self.hooks.read();
            hooks
                .get(&phase)
                .map(|entries| {
                    entries
                        .iter()
                        .map(|entry| (entry.label.clone(), Arc::clone(&entry.hook)))
                        .collect()
                })
                .unwrap_or_default()
        };

        let count = snapshot.len();
        tracing::debug!(phase = %phase, hooks = count, "running phase");

        let running = snapshot.iter().map(|(label, hook)| async move {
            hook.invoke(ctx).await.map_err(|err| {
                tracing::warn!(hook = %label, error = %err, "hook failed");
                err
            })
        });

        try_join_all(running)
            .await
            .map_err(|source| HookError::PhaseFailed {
                phase,
                source: Box::new(source),
            })?;

        Ok(count)
    }

    /// Runs all eight phases in order with a default [`LifecycleExecutor`].
    pub async fn exec(&self, root: &C) -> Result<ExecutionResult, HookError> {
        LifecycleExecutor::new().execute(self, root).await
    }
}

macro_rules! phase_shorthands {
    ($($(#[$doc:meta])* $method:ident => $phase:ident),* $(,)?) => {
        impl<C: Sync + 'static> HookRegistry<C> {
            $(
                $(#[$doc])*
                pub fn $method<F>(&self, hook: F)
                where
                    F: for<'a> Fn(&'a C) -> BoxFuture<'a, HookResult> + Send + Sync + 'static,
                {
                    self.add(Phase::$phase, hook);
                }
            )*
        }
    };
}

phase_shorthands! {
    /// Appends a hook to [`Phase::BeforeCreate`].
    before_create => BeforeCreate,
    /// Appends a hook to [`Phase::Created`].
    created => Created,
    /// Appends a hook to [`Phase::BeforeMount`].
    before_mount => BeforeMount,
    /// Appends a hook to [`Phase::Mounted`].
    mounted => Mounted,
    /// Appends a hook to [`Phase::BeforeUpdate`].
    before_update => BeforeUpdate,
    /// Appends a hook to [`Phase::Updated`].
    updated => Updated,
    /// Appends a hook to [`Phase::BeforeUnmount`].
    before_unmount => BeforeUnmount,
    /// Appends a hook to [`Phase::Unmounted`].
    unmounted => Unmounted,
}
