//! # Condition Poller
//!
//! Bounded-retry readiness polling: repeatedly probe an injected lookup for
//! one or more named bindings until they all resolve, a retry budget is
//! exhausted, or a wall-clock timeout elapses.
//!
//! The typical use is working around script-loading races: code that depends
//! on globals published by asynchronously loaded modules waits for the names
//! to appear instead of assuming load order.
//!
//! ## Key Guarantees
//!
//! - **Exactly-once terminal callback**: per wait, exactly one of success,
//!   timeout, or exhaustion fires, at most once
//! - **Timeout outranks retries**: when both budgets would trip, a slow
//!   environment is reported as a timeout, not as exhaustion
//! - **Non-blocking**: `wait()` returns immediately; suspension between
//!   checks is a scheduled timer, never a blocking sleep
//! - **Independent waits**: concurrent waits share nothing but the read-only
//!   lookup
//! - **Cancellation**: a [`WaitHandle`] can stop a wait and guarantee no
//!   further callback fires
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use condition_poller::{BindingRegistry, PollConfig, WaitCallbacks, Waiter};
//!
//! let registry = BindingRegistry::new();
//! let waiter = Waiter::new(registry.clone());
//!
//! // A loader publishes the name once its script has run.
//! tokio::spawn(async move {
//!     tokio::time::sleep(Duration::from_millis(25)).await;
//!     registry.define("WebGLTestUtils");
//! });
//!
//! // Async form:
//! waiter.wait_ready("WebGLTestUtils", PollConfig::default()).await?;
//!
//! // Callback form:
//! let handle = waiter.wait(
//!     vec!["description", "debug"],
//!     PollConfig::default().with_timeout(Duration::from_secs(5)),
//!     WaitCallbacks::new(|| println!("dependencies ready"))
//!         .on_timeout(|failure| eprintln!("missing: {:?}", failure.missing)),
//! )?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Waiter<L: BindingLookup>
//!     │
//!     ├── wait_ready()  — inline async wait, Result-returning
//!     │
//!     └── wait()        — spawns one polling task per call
//!             │
//!             ├── PollState (retries_used, start instant) — task-local
//!             ├── tick: timeout check > retry check > probe all names
//!             └── claim flag — terminal dispatch and cancel race for it
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod logging;
pub mod outcome;
pub mod request;
pub mod waiter;

// Re-export main types for convenience
pub use config::PollConfig;
pub use error::{Result, WaitError};
pub use handle::{WaitCallbacks, WaitHandle};
pub use outcome::{WaitFailure, WaitOutcome};
pub use request::WaitRequest;
pub use waiter::Waiter;

// Re-export the lookup capability from the registry crate
pub use binding_registry::{BindingLookup, BindingRegistry, Probe};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BindingLookup, BindingRegistry, PollConfig, Probe, Result, WaitCallbacks, WaitError,
        WaitFailure, WaitHandle, WaitOutcome, WaitRequest, Waiter,
    };
}
