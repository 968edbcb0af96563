//! Error types for planning operations.

use std::time::Duration;

use thiserror::Error;

/// Errors produced at the planner boundary.
///
/// Input problems are always reported before any search work starts;
/// the search itself never fails once it has begun.
#[derive(Debug, Error)]
pub enum PlanError {
    /// An activity record violates the data contract.
    #[error("invalid activity #{index} ({name:?}): {reason}")]
    InvalidActivity {
        /// Position of the record in the caller's collection.
        index: usize,
        /// Name as supplied (may be empty).
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The time budget is negative.
    #[error("invalid time budget {0}: must be non-negative")]
    InvalidBudget(i64),

    /// A configuration struct failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An activity file could not be read or is not a JSON array.
    #[error("import failed: {0}")]
    Import(String),

    /// The harness gave up waiting for the search.
    #[error("search did not finish within {0:?}")]
    Timeout(Duration),

    /// The search worker terminated without producing a result.
    #[error("search worker terminated unexpectedly")]
    WorkerLost,
}

impl PlanError {
    pub(crate) fn invalid_activity(
        index: usize,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidActivity {
            index,
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was raised before any search work began.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidActivity { .. } | Self::InvalidBudget(_) | Self::InvalidConfig(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_activity() {
        let err = PlanError::invalid_activity(2, "Nap", "duration must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid activity #2 (\"Nap\"): duration must be positive, got 0"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_timeout_is_not_input_error() {
        let err = PlanError::Timeout(Duration::from_secs(1));
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("1s"));
    }
}
