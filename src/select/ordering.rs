//! Density ordering of candidate activities.
//!
//! Activities are ranked by `priority / duration`, highest first, so the
//! depth-first search meets high-value-per-minute selections early and the
//! bound prunes more of the tree. Ratios are compared by cross-multiplication,
//! so no division ever happens.

use std::cmp::Ordering;

use crate::activity::Activity;
use crate::error::{PlanError, Result};

/// Returns indices into `activities` sorted by density, descending.
///
/// The sort is stable; callers must not rely on the order of ties.
/// Records with a non-positive duration are rejected.
///
/// # Examples
///
/// ```
/// use u_dayplan::{select::density_order, Activity};
///
/// let acts = vec![
///     Activity::new("A", 30, 5),
///     Activity::new("B", 20, 8),
///     Activity::new("C", 10, 3),
/// ];
/// assert_eq!(density_order(&acts).unwrap(), vec![1, 2, 0]);
/// ```
pub fn density_order(activities: &[Activity]) -> Result<Vec<usize>> {
    if let Some((i, a)) = activities
        .iter()
        .enumerate()
        .find(|(_, a)| a.duration <= 0)
    {
        return Err(PlanError::invalid_activity(
            i,
            &a.name,
            format!("duration must be positive, got {}", a.duration),
        ));
    }
    Ok(sort_by_density(activities))
}

/// Sorts without checking durations. Every duration must be positive.
pub(crate) fn sort_by_density(activities: &[Activity]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..activities.len()).collect();
    indices.sort_by(|&a, &b| compare_density(&activities[b], &activities[a]));
    indices
}

/// Orders `a` against `b` by `priority / duration`.
fn compare_density(a: &Activity, b: &Activity) -> Ordering {
    let lhs = i128::from(a.priority) * i128::from(b.duration);
    let rhs = i128::from(b.priority) * i128::from(a.duration);
    lhs.cmp(&rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_density() {
        let acts = vec![
            Activity::new("slow", 100, 1),
            Activity::new("fast", 1, 10),
            Activity::new("mid", 10, 5),
        ];
        let order = density_order(&acts).unwrap();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_are_stable() {
        let acts = vec![
            Activity::new("a", 10, 2),
            Activity::new("b", 5, 1),
            Activity::new("c", 20, 4),
        ];
        assert_eq!(density_order(&acts).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let acts = vec![Activity::new("ok", 5, 1), Activity::new("zero", 0, 3)];
        match density_order(&acts) {
            Err(PlanError::InvalidActivity { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidActivity, got {other:?}"),
        }
    }

    #[test]
    fn test_empty() {
        assert!(density_order(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_agrees_with_float_density() {
        let acts = vec![
            Activity::new("a", 7, 3),
            Activity::new("b", 9, 4),
            Activity::new("c", 2, 1),
            Activity::new("d", 13, 6),
        ];
        let order = density_order(&acts).unwrap();
        for w in order.windows(2) {
            let da = acts[w[0]].density().unwrap();
            let db = acts[w[1]].density().unwrap();
            assert!(da >= db, "{da} should not be below {db}");
        }
    }

    #[test]
    fn test_input_untouched() {
        let acts = vec![Activity::new("x", 3, 1), Activity::new("y", 1, 9)];
        let before = acts.clone();
        let _ = density_order(&acts).unwrap();
        assert_eq!(acts, before);
    }
}
