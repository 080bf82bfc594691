//! Lifecycle phases.
//!
//! A component tree passes through eight phases, always in the order of
//! [`Phase::ALL`]. Phase names are accepted in their dash-separated form
//! (`before-mount`) or their mixed-case form (`beforeMount`).

use core::fmt;
use core::str::FromStr;

use crate::error::HookError;

/// One stage of the component lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Before component instances are created.
    BeforeCreate,
    /// After component instances are created.
    Created,
    /// Before components are attached to the document.
    BeforeMount,
    /// After components are attached to the document.
    Mounted,
    /// Before components refresh their state.
    BeforeUpdate,
    /// After components refresh their state.
    Updated,
    /// Before components are detached.
    BeforeUnmount,
    /// After components are detached.
    Unmounted,
}

impl Phase {
    /// Every phase, in execution order.
    pub const ALL: [Phase; 8] = [
        Phase::BeforeCreate,
        Phase::Created,
        Phase::BeforeMount,
        Phase::Mounted,
        Phase::BeforeUpdate,
        Phase::Updated,
        Phase::BeforeUnmount,
        Phase::Unmounted,
    ];

    /// Returns the dash-separated name, e.g. `before-create`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::BeforeCreate => "before-create",
            Phase::Created => "created",
            Phase::BeforeMount => "before-mount",
            Phase::Mounted => "mounted",
            Phase::BeforeUpdate => "before-update",
            Phase::Updated => "updated",
            Phase::BeforeUnmount => "before-unmount",
            Phase::Unmounted => "unmounted",
        }
    }

    /// Returns the mixed-case name, e.g. `beforeCreate`.
    #[must_use]
    pub const fn camel_name(self) -> &'static str {
        match self {
            Phase::BeforeCreate => "beforeCreate",
            Phase::Created => "created",
            Phase::BeforeMount => "beforeMount",
            Phase::Mounted => "mounted",
            Phase::BeforeUpdate => "beforeUpdate",
            Phase::Updated => "updated",
            Phase::BeforeUnmount => "beforeUnmount",
            Phase::Unmounted => "unmounted",
        }
    }

    /// Returns the position of this phase in [`Phase::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the phase that follows this one, or `None` after `unmounted`.
    #[must_use]
    pub fn next(self) -> Option<Phase> {
        Phase::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = HookError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.name() == name || phase.camel_name() == name)
            .ok_or_else(|| HookError::UnknownPhase(name.to_owned()))
    }
}
