//! Lifecycle execution engine.
//!
//! The [`LifecycleExecutor`] walks the eight phases of [`Phase::ALL`] in
//! order, running each phase's hooks through
//! [`HookRegistry::run_phase`] and waiting for all of them before starting
//! the next phase.
//!
//! ```text
//! Idle → before-create → created → before-mount → mounted
//!      → before-update → updated → before-unmount → unmounted → Idle
//! ```
//!
//! The first failing phase ends the run; later phases are not started.
//!
//! # Example
//!
//! ```
//! use theophile_hooks::{HookRegistry, LifecycleExecutor, Phase};
//!
//! # futures::executor::block_on(async {
//! let hooks = HookRegistry::<()>::new();
//! hooks.observe(Phase::Mounted, |_| tracing::info!("mounted"));
//!
//! let result = LifecycleExecutor::new().execute(&hooks, &()).await.unwrap();
//! assert_eq!(result.phases_run, 8);
//! assert_eq!(result.hooks_invoked, 1);
//! # });
//! ```

use core::time::Duration;
use std::time::Instant;

use tracing::Instrument;

use crate::api::HookRegistry;
use crate::error::HookError;
use crate::phase::Phase;

/// Result of one lifecycle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of phases that completed.
    pub phases_run: usize,
    /// Number of hooks invoked across all phases.
    pub hooks_invoked: usize,
    /// Total execution duration.
    pub duration: Duration,
}

/// Runs the full lifecycle over a [`HookRegistry`].
///
/// The executor holds no state between runs. Overlapping runs over the same
/// registry are not coordinated; callers that need exclusivity serialize
/// their calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifecycleExecutor {
    _private: (),
}

impl LifecycleExecutor {
    /// Creates a new executor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every phase in order with `root` as the context.
    ///
    /// Emits `trace`-level begin/end markers inside a `theophile::exec` span.
    pub async fn execute<C: Sync + 'static>(
        &self,
        registry: &HookRegistry<C>,
        root: &C,
    ) -> Result<ExecutionResult, HookError> {
        let span = tracing::trace_span!("theophile::exec");
        async move {
            tracing::trace!("lifecycle begin");
            let start = Instant::now();
            let mut hooks_invoked = 0;

            for phase in Phase::ALL {
                hooks_invoked += registry
                    .run_phase(phase, root)
                    .instrument(tracing::trace_span!("phase", name = phase.name()))
                    .await?;
            }

            let result = ExecutionResult {
                phases_run: Phase::ALL.len(),
                hooks_invoked,
                duration: start.elapsed(),
            };
            tracing::trace!(
                hooks = result.hooks_invoked,
                duration = ?result.duration,
                "lifecycle end"
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
