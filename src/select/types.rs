//! Request type for the selection search.

use crate::activity::Activity;
use crate::error::Result;

use super::config::SelectConfig;
use super::runner::{SelectResult, SelectRunner};

/// One planning problem: candidate activities and a time budget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Candidate activities, in any order.
    pub activities: Vec<Activity>,
    /// Total time available.
    pub budget: i64,
}

impl PlanRequest {
    /// Creates a new request.
    pub fn new(activities: Vec<Activity>, budget: i64) -> Self {
        Self { activities, budget }
    }

    /// Solves this request with the given configuration.
    pub fn solve(&self, config: &SelectConfig) -> Result<SelectResult> {
        SelectRunner::run(&self.activities, self.budget, config)
    }
}
