//! Errors raised by hook registration and execution.

use core::fmt;

use crate::phase::Phase;

/// Errors that can occur while registering or running hooks.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// A phase name outside the eight lifecycle phases.
    #[error("unknown hook {0}")]
    UnknownPhase(String),

    /// A hook callback reported a failure.
    #[error("hook failed: {0}")]
    Callback(String),

    /// A hook failed while its phase was running; later phases were skipped.
    #[error("{phase} hooks failed: {source}")]
    PhaseFailed {
        /// The phase that was running.
        phase: Phase,
        /// The first failure reported by a hook in that phase.
        source: Box<HookError>,
    },

    /// The same plugin was installed twice into one registry.
    #[error("plugin '{0}' is already installed")]
    DuplicatePlugin(&'static str),
}

impl HookError {
    /// Creates a [`HookError::Callback`] from any displayable error.
    pub fn callback(error: impl fmt::Display) -> Self {
        HookError::Callback(error.to_string())
    }

    /// Returns the phase that failed, if this error aborted a run.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            HookError::PhaseFailed { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

/// Result returned by hook callbacks.
pub type HookResult = Result<(), HookError>;
