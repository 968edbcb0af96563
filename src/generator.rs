//! Synthetic activity sets for benchmarks, demos and randomized tests.

use rand::Rng;

use crate::activity::{Activity, MAX_PRIORITY, MIN_PRIORITY};

/// Parameters for [`generate_activities`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of activities.
    pub count: usize,
    /// Shortest duration (inclusive).
    pub min_duration: i64,
    /// Longest duration (inclusive).
    pub max_duration: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 20,
            min_duration: 5,
            max_duration: 120,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of activities.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the duration range.
    pub fn with_duration_range(mut self, min: i64, max: i64) -> Self {
        self.min_duration = min;
        self.max_duration = max;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_duration <= 0 {
            return Err(format!(
                "min_duration must be positive, got {}",
                self.min_duration
            ));
        }
        if self.max_duration < self.min_duration {
            return Err("max_duration must be at least min_duration".into());
        }
        Ok(())
    }
}

/// Generates `config.count` valid activities named `task-0`, `task-1`, ...
///
/// # Panics
///
/// Panics if the configuration is invalid (call
/// [`GeneratorConfig::validate`] first to get a descriptive error).
pub fn generate_activities<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Activity> {
    config.validate().expect("invalid GeneratorConfig");
    (0..config.count)
        .map(|i| {
            Activity::new(
                format!("task-{i}"),
                rng.random_range(config.min_duration..=config.max_duration),
                rng.random_range(MIN_PRIORITY..=MAX_PRIORITY),
            )
        })
        .collect()
}
