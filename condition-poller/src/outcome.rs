//! Terminal outcomes of a wait.

use std::time::Duration;

use crate::error::{Result, WaitError};

/// Diagnostic report for a wait that ended without success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitFailure {
    /// Names still unresolved at the terminal tick, in request order.
    pub missing: Vec<String>,
    /// Checks performed before the wait ended.
    pub retries_used: u32,
    /// Wall-clock time from the first tick to the terminal tick.
    pub elapsed: Duration,
}

/// The single terminal state a wait reaches.
///
/// A wait is pending until exactly one of these is produced; no further ticks
/// occur afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// Every requested binding resolved.
    Succeeded,
    /// The wall-clock budget tripped first.
    TimedOut(WaitFailure),
    /// The attempt-count budget tripped first.
    Exhausted(WaitFailure),
}

impl WaitOutcome {
    /// Whether the wait succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, WaitOutcome::Succeeded)
    }

    /// Fold into a `Result` for the async calling convention.
    pub fn into_result(self) -> Result<()> {
        match self {
            WaitOutcome::Succeeded => Ok(()),
            WaitOutcome::TimedOut(failure) => Err(WaitError::Timeout {
                elapsed: failure.elapsed,
                retries_used: failure.retries_used,
                missing: failure.missing,
            }),
            WaitOutcome::Exhausted(failure) => Err(WaitError::RetryExhausted {
                retries_used: failure.retries_used,
                missing: failure.missing,
            }),
        }
    }
}
