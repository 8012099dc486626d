//! Simulates waiting on asynchronously loaded scripts.
//!
//! Three "scripts" publish their globals into a shared registry at staggered
//! times; the main task waits for all of them before proceeding, then shows
//! the callback form giving up on a name that never loads.

use std::time::Duration;

use binding_registry::BindingRegistry;
use condition_poller::logging::{init_logging, LoggingMode};
use condition_poller::{PollConfig, WaitCallbacks, Waiter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    let registry = BindingRegistry::new();
    let waiter = Waiter::new(registry.clone());

    for (name, delay_ms) in [("vendor", 40u64), ("app", 120), ("bootstrap", 200)] {
        let registry = registry.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            registry.define(name);
            tracing::info!(name, "script finished loading");
        });
    }

    let config = PollConfig::default()
        .with_retry_interval(Duration::from_millis(25))
        .with_timeout(Duration::from_secs(2))
        .with_debug(true);

    waiter
        .wait_ready(vec!["vendor", "app", "bootstrap"], config)
        .await?;
    tracing::info!(defined = ?registry.defined_names(), "all dependencies ready");

    // Callback form with a deliberately tight budget.
    let handle = waiter.wait(
        "never-loaded",
        config.with_max_retries(4),
        WaitCallbacks::new(|| tracing::info!("unexpected success"))
            .on_exhausted(|failure| tracing::warn!(missing = ?failure.missing, "gave up")),
    )?;
    while !handle.is_finished() {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    Ok(())
}
