//! Activity model.
//!
//! An activity is an indivisible block of work with a fixed time cost
//! (`duration`) and a value (`priority`). Names are descriptive only:
//! two activities with identical fields are still distinct items.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest accepted priority.
pub const MIN_PRIORITY: u32 = 1;

/// Highest accepted priority.
pub const MAX_PRIORITY: u32 = 10;

/// A candidate activity.
///
/// Construction does not validate; see [`Activity::validate`] and
/// [`crate::validation::validate_activities`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Activity {
    /// Display name.
    #[cfg_attr(feature = "serde", serde(alias = "nama"))]
    pub name: String,
    /// Time cost, in the same unit as the budget (minutes in the CLI).
    #[cfg_attr(feature = "serde", serde(alias = "durasi"))]
    pub duration: i64,
    /// Value in `[MIN_PRIORITY, MAX_PRIORITY]`.
    #[cfg_attr(feature = "serde", serde(alias = "prioritas"))]
    pub priority: u32,
}

impl Activity {
    /// Creates a new activity.
    pub fn new(name: impl Into<String>, duration: i64, priority: u32) -> Self {
        Self {
            name: name.into(),
            duration,
            priority,
        }
    }

    /// Priority per unit of time.
    ///
    /// Returns `None` for a non-positive duration instead of dividing by it.
    pub fn density(&self) -> Option<f64> {
        (self.duration > 0).then(|| f64::from(self.priority) / self.duration as f64)
    }

    /// Checks this record against the data contract.
    ///
    /// `index` is only used to label the error.
    pub fn validate(&self, index: usize) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::PlanError::invalid_activity(
                index,
                &self.name,
                "name must not be empty",
            ));
        }
        if self.duration <= 0 {
            return Err(crate::PlanError::invalid_activity(
                index,
                &self.name,
                format!("duration must be positive, got {}", self.duration),
            ));
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority) {
            return Err(crate::PlanError::invalid_activity(
                index,
                &self.name,
                format!(
                    "priority must be in [{MIN_PRIORITY}, {MAX_PRIORITY}], got {}",
                    self.priority
                ),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}m, P{})", self.name, self.duration, self.priority)
    }
}
