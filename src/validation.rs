//! Input validation for planning requests.
//!
//! Runs before ordering or search. A single bad record rejects the whole
//! call; skipping bad records is the import layer's business (see
//! [`crate::import`]).

use crate::activity::Activity;
use crate::error::{PlanError, Result};

/// Validates every activity, failing on the first offending record.
pub fn validate_activities(activities: &[Activity]) -> Result<()> {
    activities
        .iter()
        .enumerate()
        .try_for_each(|(i, a)| a.validate(i))
}

/// Validates a time budget.
pub fn validate_budget(budget: i64) -> Result<()> {
    if budget < 0 {
        return Err(PlanError::InvalidBudget(budget));
    }
    Ok(())
}

/// Validates a complete request.
pub fn validate_request(activities: &[Activity], budget: i64) -> Result<()> {
    validate_budget(budget)?;
    validate_activities(activities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let acts = vec![Activity::new("A", 30, 5), Activity::new("B", 20, 8)];
        assert!(validate_request(&acts, 40).is_ok());
        assert!(validate_request(&acts, 0).is_ok());
        assert!(validate_request(&[], 0).is_ok());
    }

    #[test]
    fn test_negative_budget() {
        let err = validate_budget(-1).unwrap_err();
        assert!(matches!(err, PlanError::InvalidBudget(-1)));
    }

    #[test]
    fn test_reports_first_bad_index() {
        let acts = vec![
            Activity::new("ok", 10, 5),
            Activity::new("bad", 0, 5),
            Activity::new("worse", -1, 50),
        ];
        match validate_activities(&acts) {
            Err(PlanError::InvalidActivity { index, name, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "bad");
            }
            other => panic!("expected InvalidActivity, got {other:?}"),
        }
    }

    #[test]
    fn test_budget_checked_before_activities() {
        let acts = vec![Activity::new("bad", 0, 5)];
        assert!(matches!(
            validate_request(&acts, -5),
            Err(PlanError::InvalidBudget(-5))
        ));
    }
}
