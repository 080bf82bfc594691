//! Integration tests for lifecycle execution.
//!
//! These tests pin down the scheduling guarantees of a run:
//! - phases run in the fixed order, whatever the registration order
//! - hooks of one phase run concurrently
//! - a phase waits for its slowest hook before the next phase starts
//! - a failing hook ends the run
//! - hooks added mid-phase are picked up by the next run

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use theophile_hooks::{HookError, HookRegistry, LifecycleExecutor, Phase, Plugin};
use tokio::sync::Barrier;

// ─────────────────────────────────────────────────────────────────────────────
// Test Context
// ─────────────────────────────────────────────────────────────────────────────

/// Shared event log threaded through every hook as the run context.
#[derive(Default)]
struct Root {
    log: Mutex<Vec<String>>,
}

impl Root {
    fn push(&self, entry: impl Into<String>) {
        self.log.lock().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.log.lock().clone()
    }
}

fn log_phase(hooks: &HookRegistry<Root>, phase: Phase) {
    hooks.observe(phase, move |root: &Root| root.push(phase.name()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn exec_logs_phases_in_order_regardless_of_registration_order() {
    let hooks = HookRegistry::<Root>::new();
    for index in [5, 2, 7, 0, 3, 6, 1, 4] {
        log_phase(&hooks, Phase::ALL[index]);
    }

    let root = Root::default();
    let result = hooks.exec(&root).await.unwrap();

    assert_eq!(result.phases_run, 8);
    assert_eq!(
        root.entries(),
        [
            "before-create",
            "created",
            "before-mount",
            "mounted",
            "before-update",
            "updated",
            "before-unmount",
            "unmounted",
        ]
    );
}

#[tokio::test]
async fn slow_hook_delays_next_phase() {
    let hooks = HookRegistry::<Root>::new();
    hooks.created(|root: &Root| {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            root.push("slow created");
            Ok(())
        })
    });
    hooks.observe(Phase::Created, |root: &Root| root.push("fast created"));
    log_phase(&hooks, Phase::BeforeMount);

    let root = Root::default();
    hooks.exec(&root).await.unwrap();

    assert_eq!(root.entries(), ["fast created", "slow created", "before-mount"]);
}

#[tokio::test]
async fn hooks_within_a_phase_run_concurrently() {
    let hooks = HookRegistry::<Root>::new();
    let barrier = Arc::new(Barrier::new(2));

    for name in ["left", "right"] {
        let barrier = Arc::clone(&barrier);
        hooks.mounted(move |root: &Root| {
            let barrier = Arc::clone(&barrier);
            Box::pin(async move {
                barrier.wait().await;
                root.push(name);
                Ok(())
            })
        });
    }

    let root = Root::default();
    tokio::time::timeout(Duration::from_secs(5), hooks.run_phase(Phase::Mounted, &root))
        .await
        .expect("both hooks should reach the barrier together")
        .unwrap();

    let mut entries = root.entries();
    entries.sort();
    assert_eq!(entries, ["left", "right"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn failing_hook_aborts_remaining_phases() {
    let hooks = HookRegistry::<Root>::new();
    for phase in Phase::ALL {
        log_phase(&hooks, phase);
    }
    hooks.updated(|_| Box::pin(async { Err::<(), _>(HookError::callback("stale state")) }));

    let root = Root::default();
    let err = hooks.exec(&root).await.unwrap_err();

    assert_eq!(err.phase(), Some(Phase::Updated));
    assert_eq!(err.to_string(), "updated hooks failed: hook failed: stale state");
    assert_eq!(root.entries().last().map(String::as_str), Some("updated"));
    assert!(!root.entries().iter().any(|entry| entry == "before-unmount"));
}

#[tokio::test]
async fn exec_hook_by_name() {
    let hooks = HookRegistry::<Root>::new();
    log_phase(&hooks, Phase::BeforeUnmount);

    let root = Root::default();
    assert_eq!(hooks.exec_hook("beforeUnmount", &root).await.unwrap(), 1);
    assert_eq!(hooks.exec_hook("before-unmount", &root).await.unwrap(), 1);
    assert!(matches!(
        hooks.exec_hook("detach", &root).await,
        Err(HookError::UnknownPhase(_))
    ));
    assert_eq!(root.entries().len(), 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Registration During A Run
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn hook_added_mid_phase_runs_from_next_exec() {
    let hooks = Arc::new(HookRegistry::<Root>::new());
    let registry = Arc::downgrade(&hooks);

    hooks.observe(Phase::Mounted, move |root: &Root| {
        root.push("original");
        if let Some(registry) = registry.upgrade() {
            registry.observe(Phase::Mounted, |root: &Root| root.push("late"));
        }
    });

    let root = Root::default();
    let first = hooks.exec(&root).await.unwrap();
    assert_eq!(first.hooks_invoked, 1);
    assert_eq!(root.entries(), ["original"]);

    let second = hooks.exec(&root).await.unwrap();
    assert_eq!(second.hooks_invoked, 2);
    assert_eq!(root.entries(), ["original", "original", "late"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugins
// ─────────────────────────────────────────────────────────────────────────────

struct MountLogger;

impl Plugin<Root> for MountLogger {
    fn build(&self, registry: &HookRegistry<Root>) {
        log_phase(registry, Phase::BeforeMount);
        log_phase(registry, Phase::Mounted);
    }
}

#[tokio::test]
async fn plugin_hooks_take_part_in_the_run() {
    let hooks = HookRegistry::<Root>::new();
    hooks.add_plugin(MountLogger).unwrap();
    assert!(matches!(
        hooks.add_plugin(MountLogger),
        Err(HookError::DuplicatePlugin(_))
    ));

    let root = Root::default();
    let result = LifecycleExecutor::new().execute(&hooks, &root).await.unwrap();

    assert_eq!(result.hooks_invoked, 2);
    assert_eq!(root.entries(), ["before-mount", "mounted"]);
}
