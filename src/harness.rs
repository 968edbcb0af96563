//! Execution harness: runs one search off the calling thread with a timeout.
//!
//! The search has no cancellation checkpoints, so a timed-out search can not
//! be stopped. The harness abandons it instead: the worker thread is
//! detached, and whatever it eventually sends goes into a channel nobody
//! reads. A timeout is reported as a failure, never as a lesser answer.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, RecvTimeoutError};
use tracing::{error, info, warn};

use crate::activity::Activity;
use crate::error::{PlanError, Result};
use crate::select::{PlanRequest, SelectConfig, SelectResult, SelectRunner};
use crate::validation::validate_request;

/// Default timeout: one hour.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Configuration for [`SolveHarness`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_dayplan::harness::HarnessConfig;
///
/// let config = HarnessConfig::default().with_timeout(Duration::from_secs(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// How long to wait for the search.
    pub timeout: Duration,
    /// Search configuration.
    pub select: SelectConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            select: SelectConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Sets the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the search configuration.
    pub fn with_select(mut self, select: SelectConfig) -> Self {
        self.select = select;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.timeout.is_zero() {
            return Err("timeout must be positive".into());
        }
        self.select.validate()
    }
}

/// A completed search and how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedSelection {
    /// The search result.
    pub result: SelectResult,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
}

/// Runs searches on a dedicated worker thread with a timeout.
#[derive(Debug, Clone, Default)]
pub struct SolveHarness {
    config: HarnessConfig,
}

impl SolveHarness {
    /// Creates a harness.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Solves a request. See [`SolveHarness::run`].
    pub fn run_request(&self, request: PlanRequest) -> Result<TimedSelection> {
        self.run(request.activities, request.budget)
    }

    /// Validates the input, then searches on a worker thread.
    ///
    /// # Errors
    ///
    /// - Input errors, synchronously, before the worker starts
    /// - [`PlanError::Timeout`] if the search does not finish in time
    /// - [`PlanError::WorkerLost`] if the worker could not start or panicked
    pub fn run(&self, activities: Vec<Activity>, budget: i64) -> Result<TimedSelection> {
        self.config.validate().map_err(PlanError::InvalidConfig)?;
        validate_request(&activities, budget)?;

        let (tx, rx) = bounded(1);
        let select = self.config.select.clone();
        let count = activities.len();

        thread::Builder::new()
            .name("dayplan-search".into())
            .spawn(move || {
                let started = Instant::now();
                let result = SelectRunner::run_validated(&activities, budget, &select);
                // Fails only after a timeout, when the result must be discarded.
                let _ = tx.send(TimedSelection {
                    result,
                    elapsed: started.elapsed(),
                });
            })
            .map_err(|e| {
                error!(error = %e, "failed to spawn search worker");
                PlanError::WorkerLost
            })?;

        match rx.recv_timeout(self.config.timeout) {
            Ok(timed) => {
                info!(
                    activities = count,
                    budget,
                    score = timed.result.score,
                    elapsed_ms = timed.elapsed.as_secs_f64() * 1000.0,
                    "search finished"
                );
                Ok(timed)
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    activities = count,
                    budget,
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "search timed out, abandoning worker"
                );
                Err(PlanError::Timeout(self.config.timeout))
            }
            Err(RecvTimeoutError::Disconnected) => {
                error!("search worker exited without a result");
                Err(PlanError::WorkerLost)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(3600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = HarnessConfig::default().with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_run_completes() {
        let harness = SolveHarness::default();
        let acts = vec![
            Activity::new("A", 30, 5),
            Activity::new("B", 20, 8),
            Activity::new("C", 10, 3),
        ];
        let timed = harness.run(acts, 40).unwrap();
        assert_eq!(timed.result.score, 11);
        assert!(timed.elapsed < DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_input_errors_are_synchronous() {
        let harness = SolveHarness::default();
        assert!(matches!(
            harness.run(vec![Activity::new("A", 5, 5)], -1),
            Err(PlanError::InvalidBudget(-1))
        ));
        assert!(matches!(
            harness.run(vec![Activity::new("A", 0, 5)], 10),
            Err(PlanError::InvalidActivity { .. })
        ));

        let select = SelectConfig::default().with_satisfaction_ratio(2.0);
        let bad = SolveHarness::new(HarnessConfig::default().with_select(select));
        assert!(matches!(
            bad.run(Vec::new(), 10),
            Err(PlanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_timeout_is_reported_as_failure() {
        // Equal items where only half fit: the exhaustive search visits
        // on the order of C(40, 20) nodes.
        let acts: Vec<Activity> = (0..40)
            .map(|i| Activity::new(format!("t{i}"), 10, 10))
            .collect();
        let harness = SolveHarness::new(
            HarnessConfig::default()
                .with_timeout(Duration::from_millis(50))
                .with_select(SelectConfig::exact()),
        );
        let err = harness.run(acts, 200).unwrap_err();
        assert!(matches!(err, PlanError::Timeout(d) if d == Duration::from_millis(50)));
    }

    #[test]
    fn test_run_request() {
        let harness = SolveHarness::default();
        let request = PlanRequest::new(vec![Activity::new("Nap", 20, 4)], 30);
        let timed = harness.run_request(request).unwrap();
        assert_eq!(timed.result.selection.len(), 1);
    }
}
