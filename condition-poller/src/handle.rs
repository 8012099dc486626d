//! Callback plumbing and cancellation for in-flight waits.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::outcome::{WaitFailure, WaitOutcome};

type SuccessFn = Box<dyn FnOnce() + Send + 'static>;
type FailureFn = Box<dyn FnOnce(WaitFailure) + Send + 'static>;

/// Terminal callbacks for one wait.
///
/// Exactly one of the three fires per wait, at most once. The success
/// callback is mandatory; absent failure handlers are silent no-ops.
///
/// # Example
///
/// ```rust
/// use condition_poller::WaitCallbacks;
///
/// let callbacks = WaitCallbacks::new(|| println!("ready"))
///     .on_timeout(|failure| eprintln!("timed out, missing {:?}", failure.missing))
///     .on_exhausted(|failure| eprintln!("gave up, missing {:?}", failure.missing));
/// # let _ = callbacks;
/// ```
pub struct WaitCallbacks {
    on_success: SuccessFn,
    on_timeout: Option<FailureFn>,
    on_exhausted: Option<FailureFn>,
}

impl WaitCallbacks {
    /// Build callbacks around the mandatory success handler.
    pub fn new(on_success: impl FnOnce() + Send + 'static) -> Self {
        Self {
            on_success: Box::new(on_success),
            on_timeout: None,
            on_exhausted: None,
        }
    }

    /// Observe wall-clock timeouts.
    pub fn on_timeout(mut self, f: impl FnOnce(WaitFailure) + Send + 'static) -> Self {
        self.on_timeout = Some(Box::new(f));
        self
    }

    /// Observe retry-budget exhaustion.
    pub fn on_exhausted(mut self, f: impl FnOnce(WaitFailure) + Send + 'static) -> Self {
        self.on_exhausted = Some(Box::new(f));
        self
    }

    pub(crate) fn dispatch(self, outcome: WaitOutcome) {
        match outcome {
            WaitOutcome::Succeeded => (self.on_success)(),
            WaitOutcome::TimedOut(failure) => {
                if let Some(callback) = self.on_timeout {
                    callback(failure);
                }
            }
            WaitOutcome::Exhausted(failure) => {
                if let Some(callback) = self.on_exhausted {
                    callback(failure);
                }
            }
        }
    }
}

impl fmt::Debug for WaitCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitCallbacks")
            .field("on_timeout", &self.on_timeout.is_some())
            .field("on_exhausted", &self.on_exhausted.is_some())
            .finish()
    }
}

/// Handle to an in-flight wait.
///
/// Dropping the handle detaches the wait; the polling task keeps running
/// until it reaches a terminal state. Call [`cancel`](Self::cancel) to stop
/// it early.
#[derive(Debug)]
pub struct WaitHandle {
    claimed: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl WaitHandle {
    pub(crate) fn new(claimed: Arc<AtomicBool>, task: JoinHandle<()>) -> Self {
        Self { claimed, task }
    }

    /// Stop the wait.
    ///
    /// Returns `true` when no callback had fired yet; in that case none ever
    /// will. Returns `false` when a terminal outcome already claimed the
    /// wait.
    pub fn cancel(&self) -> bool {
        let already_claimed = self.claimed.swap(true, Ordering::SeqCst);
        self.task.abort();
        !already_claimed
    }

    /// Whether the polling task has finished, either by reaching a terminal
    /// state or by cancellation.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;

    fn failure() -> WaitFailure {
        WaitFailure {
            missing: vec!["Foo".to_string()],
            retries_used: 1,
            elapsed: Duration::from_millis(10),
        }
    }

    #[test]
    fn test_dispatch_success() {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&fired);
        let callbacks = WaitCallbacks::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        callbacks.dispatch(WaitOutcome::Succeeded);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_failure_routes_to_matching_handler() {
        let timeouts = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&timeouts);
        let callbacks = WaitCallbacks::new(|| panic!("success must not fire"))
            .on_timeout(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        callbacks.dispatch(WaitOutcome::TimedOut(failure()));
        assert_eq!(timeouts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_missing_failure_handler_is_noop() {
        let callbacks = WaitCallbacks::new(|| panic!("success must not fire"));
        callbacks.dispatch(WaitOutcome::Exhausted(failure()));
    }
}
