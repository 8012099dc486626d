//! Error types for the condition-poller crate.

use std::time::Duration;

use thiserror::Error;

/// Errors that can reject or end a wait.
///
/// Transient unavailability is not represented here: a binding that has not
/// appeared yet is cause for another tick, not an error.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The wall-clock budget tripped before every binding resolved
    #[error("timed out after {elapsed:?} ({retries_used} retries) waiting for {missing:?}")]
    Timeout {
        /// Wall-clock time spent waiting
        elapsed: Duration,
        /// Checks performed before the timeout tripped
        retries_used: u32,
        /// Names still unresolved, in request order
        missing: Vec<String>,
    },

    /// The attempt-count budget tripped before every binding resolved
    #[error("retry budget exhausted after {retries_used} attempts waiting for {missing:?}")]
    RetryExhausted {
        /// Checks performed before the budget tripped
        retries_used: u32,
        /// Names still unresolved, in request order
        missing: Vec<String>,
    },

    /// Rejected poll configuration
    #[error("invalid poll configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Results using WaitError.
pub type Result<T> = std::result::Result<T, WaitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let error = WaitError::Timeout {
            elapsed: Duration::from_millis(60),
            retries_used: 6,
            missing: vec!["Foo".to_string()],
        };
        let rendered = error.to_string();
        assert!(rendered.contains("timed out"));
        assert!(rendered.contains("6 retries"));
        assert!(rendered.contains("Foo"));
    }

    #[test]
    fn test_retry_exhausted_display() {
        let error = WaitError::RetryExhausted {
            retries_used: 3,
            missing: vec!["A".to_string(), "B".to_string()],
        };
        let rendered = error.to_string();
        assert!(rendered.contains("retry budget exhausted after 3 attempts"));
        assert!(rendered.contains("A"));
        assert!(rendered.contains("B"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = WaitError::InvalidConfig("max_retries must be greater than zero".to_string());
        assert_eq!(
            error.to_string(),
            "invalid poll configuration: max_retries must be greater than zero"
        );
    }
}
