//! Budgets and diagnostics configuration for a wait.

use std::time::Duration;

use crate::error::{Result, WaitError};

/// Configuration for one wait operation.
///
/// Immutable for the lifetime of a wait: the poller copies the config when
/// the wait starts and never reads it from shared state afterwards.
///
/// # Defaults
///
/// - `max_retries`: 100
/// - `retry_interval`: 20ms
/// - `timeout`: 10s
/// - `debug`: false
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use condition_poller::PollConfig;
///
/// let config = PollConfig::default()
///     .with_max_retries(50)
///     .with_retry_interval(Duration::from_millis(10))
///     .with_timeout(Duration::from_secs(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Maximum number of existence checks before the wait is abandoned.
    pub max_retries: u32,

    /// Delay between consecutive checks.
    pub retry_interval: Duration,

    /// Wall-clock budget for the whole wait. Checked before the retry budget
    /// on every tick, so a slow environment reports as a timeout rather than
    /// as exhaustion.
    pub timeout: Duration,

    /// Emit progress lines through `tracing` while waiting.
    pub debug: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_retries: 100,
            retry_interval: Duration::from_millis(20),
            timeout: Duration::from_secs(10),
            debug: false,
        }
    }
}

impl PollConfig {
    /// Create a config with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt-count budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the delay between checks.
    pub fn with_retry_interval(mut self, retry_interval: Duration) -> Self {
        self.retry_interval = retry_interval;
        self
    }

    /// Set the wall-clock budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable progress logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Reject zero budgets before a wait starts.
    pub fn validate(&self) -> Result<()> {
        if self.max_retries == 0 {
            return Err(WaitError::InvalidConfig(
                "max_retries must be greater than zero".to_string(),
            ));
        }
        if self.retry_interval.is_zero() {
            return Err(WaitError::InvalidConfig(
                "retry_interval must be greater than zero".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(WaitError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PollConfig::default();
        assert_eq!(config.max_retries, 100);
        assert_eq!(config.retry_interval, Duration::from_millis(20));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = PollConfig::new()
            .with_max_retries(3)
            .with_retry_interval(Duration::from_millis(10))
            .with_timeout(Duration::from_millis(50))
            .with_debug(true);

        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_interval, Duration::from_millis(10));
        assert_eq!(config.timeout, Duration::from_millis(50));
        assert!(config.debug);
    }

    #[test]
    fn test_validate_rejects_zero_budgets() {
        assert!(PollConfig::default().with_max_retries(0).validate().is_err());
        assert!(PollConfig::default()
            .with_retry_interval(Duration::ZERO)
            .validate()
            .is_err());
        assert!(PollConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
