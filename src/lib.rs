//! Time-budgeted activity selection.
//!
//! Picks the activities that fit into a fixed amount of time while
//! maximizing summed priority (a 0/1 knapsack). The item sets are small and
//! a fast good answer is preferred over a proven optimum, so the solver is an
//! anytime branch-and-bound search rather than a dynamic program:
//!
//! - **Ordering**: candidates ranked by priority per unit of time
//! - **Search**: depth-first take/skip exploration with an optimistic
//!   bound and a satisfaction cutoff (80% of the summed priority by default)
//!
//! Around the search sit the usual collaborators: validation, JSON import,
//! a worker-thread harness with a timeout, and plain-text reporting.
//!
//! # Example
//!
//! ```
//! use u_dayplan::{solve, Activity};
//!
//! let activities = vec![
//!     Activity::new("A", 30, 5),
//!     Activity::new("B", 20, 8),
//!     Activity::new("C", 10, 3),
//! ];
//! let result = solve(&activities, 40).unwrap();
//! assert_eq!(result.score, 11);
//! ```
//!
//! # Features
//!
//! - `serde` (default): serde derives and the JSON activity format
//! - `parallel`: [`select::solve_batch`] on rayon
//! - `wasm`: JavaScript bindings
//! - `cli`: the `dayplan` binary

pub mod activity;
pub mod error;
pub mod generator;
pub mod harness;
pub mod import;
pub mod report;
pub mod select;
#[cfg(feature = "cli")]
pub mod telemetry;
pub mod validation;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use activity::Activity;
pub use error::{PlanError, Result};
pub use select::{SelectConfig, SelectResult};

/// Selects the best activities for `budget` with the default configuration.
///
/// # Errors
///
/// Input errors only, raised before any search work; see
/// [`select::SelectRunner::run`].
pub fn solve(activities: &[Activity], budget: i64) -> Result<SelectResult> {
    select::SelectRunner::run(activities, budget, &SelectConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_example() {
        let activities = vec![
            Activity::new("A", 30, 5),
            Activity::new("B", 20, 8),
            Activity::new("C", 10, 3),
        ];
        let result = solve(&activities, 40).unwrap();
        assert_eq!(result.score, 11);
        let mut names: Vec<_> = result.selection.iter().map(|a| a.name.clone()).collect();
        names.sort();
        assert_eq!(names, ["B", "C"]);
    }

    #[test]
    fn test_solve_is_independent_per_call() {
        let small = vec![Activity::new("x", 5, 2)];
        let big = vec![Activity::new("y", 5, 9), Activity::new("z", 5, 9)];
        assert_eq!(solve(&big, 10).unwrap().score, 18);
        assert_eq!(solve(&small, 10).unwrap().score, 2);
    }
}
