//! Bounded subset search.
//!
//! # Algorithm
//!
//! 1. Order candidates by density (see [`density_order`](super::density_order)).
//! 2. Depth-first over "take activity `i`, continue from `i + 1`" decisions,
//!    taking an activity only if it fits the remaining time.
//! 3. On entry to every node:
//!    a. Prune if `partial + remaining_potential <= best` (optimistic bound,
//!       time ignored)
//!    b. Prune if `best >= floor(total_priority * satisfaction_ratio)` (at least 1)
//!    c. Record the partial selection if it beats the best
//!
//! Rule (b) makes the search anytime: once the threshold is crossed anywhere,
//! the rest of the tree is abandoned and the result may be below the optimum.
//!
//! # Reference
//!
//! Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", Ch. 2.

use tracing::debug;

use super::config::SelectConfig;
use super::ordering::sort_by_density;
use crate::activity::Activity;
use crate::error::{PlanError, Result};
use crate::validation::validate_request;

/// Counters collected during one search.
///
/// The bound uses the summed priority of the candidates after the current
/// one, so `calls` and `bound_prunes` are lower than with a bound that only
/// subtracts taken priorities; the selection found is the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Number of search nodes entered (including pruned ones).
    pub calls: u64,
    /// Nodes cut by the optimistic bound.
    pub bound_prunes: u64,
    /// Nodes cut because the satisfaction threshold was already met.
    pub threshold_prunes: u64,
    /// Times the best selection was replaced.
    pub improvements: u64,
}

/// Result of a selection search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectResult {
    /// Chosen activities, in density order.
    pub selection: Vec<Activity>,
    /// Sum of the chosen priorities.
    pub score: u64,
    /// Sum of the chosen durations.
    pub time_used: i64,
    /// Sum of all candidate priorities.
    pub total_priority: u64,
    /// Score at which the search stopped trying to improve.
    pub satisfaction_threshold: u64,
    /// Search counters.
    pub stats: SearchStats,
}

impl SelectResult {
    /// Whether the satisfaction threshold was reached.
    ///
    /// When it was not, the search ran to completion and `score` is optimal.
    pub fn is_satisfied(&self) -> bool {
        self.score >= self.satisfaction_threshold
    }
}

/// Runs the bounded subset search.
pub struct SelectRunner;

impl SelectRunner {
    /// Validates the request, then searches for the best selection.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidConfig`], [`PlanError::InvalidBudget`] or
    /// [`PlanError::InvalidActivity`]; all raised before any search work.
    pub fn run(
        activities: &[Activity],
        budget: i64,
        config: &SelectConfig,
    ) -> Result<SelectResult> {
        config.validate().map_err(PlanError::InvalidConfig)?;
        validate_request(activities, budget)?;
        Ok(Self::run_validated(activities, budget, config))
    }

    /// Searches assuming the request and config were already validated.
    pub(crate) fn run_validated(
        activities: &[Activity],
        budget: i64,
        config: &SelectConfig,
    ) -> SelectResult {
        let candidates: Vec<&Activity> = sort_by_density(activities)
            .into_iter()
            .map(|i| &activities[i])
            .collect();

        let mut suffix_priority = vec![0u64; candidates.len() + 1];
        for i in (0..candidates.len()).rev() {
            suffix_priority[i] = suffix_priority[i + 1] + u64::from(candidates[i].priority);
        }
        let total_priority = suffix_priority[0];
        let threshold = config.satisfaction_threshold(total_priority);

        debug!(
            candidates = candidates.len(),
            budget,
            total_priority,
            threshold,
            "starting activity selection"
        );

        let mut search = Search {
            candidates: &candidates,
            suffix_priority: &suffix_priority,
            threshold,
            best_picks: Vec::new(),
            best_score: 0,
            stats: SearchStats::default(),
        };
        let mut partial = Vec::with_capacity(candidates.len());
        search.explore(0, budget, &mut partial, 0, total_priority);

        let Search {
            best_picks,
            best_score,
            stats,
            ..
        } = search;

        let selection: Vec<Activity> = best_picks
            .iter()
            .map(|&i| candidates[i].clone())
            .collect();
        let time_used = selection.iter().map(|a| a.duration).sum();

        debug!(
            score = best_score,
            time_used,
            calls = stats.calls,
            bound_prunes = stats.bound_prunes,
            threshold_prunes = stats.threshold_prunes,
            "activity selection finished"
        );

        SelectResult {
            selection,
            score: best_score,
            time_used,
            total_priority,
            satisfaction_threshold: threshold,
            stats,
        }
    }
}

/// State shared by every node of one search; never outlives the call.
struct Search<'a> {
    candidates: &'a [&'a Activity],
    /// `suffix_priority[i]` is the summed priority of `candidates[i..]`.
    suffix_priority: &'a [u64],
    threshold: u64,
    best_picks: Vec<usize>,
    best_score: u64,
    stats: SearchStats,
}

impl Search<'_> {
    /// `partial` holds candidate indices; it is restored before returning.
    fn explore(
        &mut self,
        start: usize,
        time_remaining: i64,
        partial: &mut Vec<usize>,
        partial_score: u64,
        remaining_potential: u64,
    ) {
        self.stats.calls += 1;

        if partial_score + remaining_potential <= self.best_score {
            self.stats.bound_prunes += 1;
            return;
        }
        if self.best_score >= self.threshold {
            self.stats.threshold_prunes += 1;
            return;
        }

        if partial_score > self.best_score {
            self.best_picks.clone_from(partial);
            self.best_score = partial_score;
            self.stats.improvements += 1;
        }

        let candidates = self.candidates;
        for (i, act) in candidates.iter().enumerate().skip(start) {
            if act.duration > time_remaining {
                continue;
            }
            partial.push(i);
            self.explore(
                i + 1,
                time_remaining - act.duration,
                partial,
                partial_score + u64::from(act.priority),
                self.suffix_priority[i + 1],
            );
            partial.pop();
        }
    }
}
