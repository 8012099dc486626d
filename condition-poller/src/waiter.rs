//! The poller itself: spawns and drives bounded-retry waits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use binding_registry::BindingLookup;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::config::PollConfig;
use crate::error::Result;
use crate::handle::{WaitCallbacks, WaitHandle};
use crate::outcome::{WaitFailure, WaitOutcome};
use crate::request::WaitRequest;

/// Progress lines are emitted every this many retries when debug is on,
/// to keep long waits from flooding the log.
const DEBUG_LOG_EVERY: u32 = 10;

/// Polls an injected lookup until a request resolves or a budget trips.
///
/// The waiter holds only the shared read-only lookup. Every wait it starts
/// owns an independent retry count and clock, so concurrent waits never
/// interfere and no locking is needed.
///
/// # Example
///
/// ```rust,ignore
/// use condition_poller::{BindingRegistry, PollConfig, Waiter};
///
/// let registry = BindingRegistry::new();
/// let waiter = Waiter::new(registry.clone());
///
/// // Elsewhere, a loader eventually calls registry.define("ThreeJS").
/// waiter.wait_ready("ThreeJS", PollConfig::default()).await?;
/// ```
pub struct Waiter<L> {
    lookup: Arc<L>,
}

impl<L> Clone for Waiter<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
        }
    }
}

impl<L> Waiter<L>
where
    L: BindingLookup + Send + Sync + 'static,
{
    /// Create a waiter over the given lookup.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Create a waiter from an already-shared lookup.
    pub fn from_shared(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Await the request inline.
    ///
    /// Resolves `Ok(())` once every requested binding exists, or an error
    /// naming whichever budget tripped first. Probe failures are folded into
    /// "not yet available" and never surface as panics.
    pub async fn wait_ready(
        &self,
        request: impl Into<WaitRequest>,
        config: PollConfig,
    ) -> Result<()> {
        config.validate()?;
        poll_loop(self.lookup.as_ref(), &request.into(), &config)
            .await
            .into_result()
    }

    /// Start a wait and return immediately.
    ///
    /// The first existence check runs on the spawned task, so the caller is
    /// never blocked. Exactly one of the callbacks fires, at most once,
    /// unless [`WaitHandle::cancel`] claims the wait first.
    pub fn wait(
        &self,
        request: impl Into<WaitRequest>,
        config: PollConfig,
        callbacks: WaitCallbacks,
    ) -> Result<WaitHandle> {
        config.validate()?;
        let request = request.into();
        let lookup = Arc::clone(&self.lookup);
        let claimed = Arc::new(AtomicBool::new(false));
        let task_claimed = Arc::clone(&claimed);

        let task = tokio::spawn(async move {
            let outcome = poll_loop(lookup.as_ref(), &request, &config).await;
            // First claimant wins: this terminal outcome or a cancel().
            if task_claimed.swap(true, Ordering::SeqCst) {
                return;
            }
            callbacks.dispatch(outcome);
        });

        Ok(WaitHandle::new(claimed, task))
    }
}

/// One wait's retry loop. Owns its state; nothing here is shared.
async fn poll_loop<L>(lookup: &L, request: &WaitRequest, config: &PollConfig) -> WaitOutcome
where
    L: BindingLookup + ?Sized,
{
    let started = Instant::now();
    let mut retries_used: u32 = 0;

    loop {
        let elapsed = started.elapsed();

        // The timeout check outranks the retry budget on every tick.
        if elapsed > config.timeout {
            let missing = request.missing(lookup);
            if config.debug {
                warn!(request = %request, ?elapsed, ?missing, "timed out waiting for bindings");
            }
            return WaitOutcome::TimedOut(WaitFailure {
                missing,
                retries_used,
                elapsed,
            });
        }

        if retries_used >= config.max_retries {
            let missing = request.missing(lookup);
            if config.debug {
                warn!(request = %request, retries_used, ?missing, "retry budget exhausted");
            }
            return WaitOutcome::Exhausted(WaitFailure {
                missing,
                retries_used,
                elapsed,
            });
        }

        let missing = request.missing(lookup);
        if missing.is_empty() {
            if config.debug {
                debug!(request = %request, retries_used, "all bindings available");
            }
            return WaitOutcome::Succeeded;
        }

        retries_used += 1;
        if config.debug && retries_used % DEBUG_LOG_EVERY == 0 {
            debug!(
                retries = retries_used,
                max_retries = config.max_retries,
                ?missing,
                "still waiting for bindings"
            );
        }
        tokio::time::sleep(config.retry_interval).await;
    }
}
