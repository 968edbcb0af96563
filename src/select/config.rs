//! Selection search configuration.

/// Default fraction of the total priority at which the search is satisfied.
pub const DEFAULT_SATISFACTION_RATIO: f64 = 0.80;

/// Configuration for the bounded subset search.
///
/// # Examples
///
/// ```
/// use u_dayplan::select::SelectConfig;
///
/// let config = SelectConfig::default();
/// assert!((config.satisfaction_ratio - 0.80).abs() < 1e-12);
///
/// // Exhaustive: only stop early when every activity was taken.
/// let exact = SelectConfig::exact();
/// assert!(exact.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectConfig {
    /// Fraction of the summed priority (ignoring time) that ends the search
    /// once the best selection reaches it.
    ///
    /// The threshold is `floor(total_priority * satisfaction_ratio)`. Must be
    /// in `(0, 1]`; `1.0` makes the result the true optimum.
    pub satisfaction_ratio: f64,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            satisfaction_ratio: DEFAULT_SATISFACTION_RATIO,
        }
    }
}

impl SelectConfig {
    /// A configuration whose result is always optimal.
    pub fn exact() -> Self {
        Self {
            satisfaction_ratio: 1.0,
        }
    }

    /// Sets the satisfaction ratio.
    pub fn with_satisfaction_ratio(mut self, ratio: f64) -> Self {
        self.satisfaction_ratio = ratio;
        self
    }

    /// Score at which the search stops looking for improvements.
    ///
    /// Never below 1, so an empty selection can not satisfy the search:
    /// with a total priority of 1 the floor would be 0 and a single fitting
    /// activity would never be taken.
    pub fn satisfaction_threshold(&self, total_priority: u64) -> u64 {
        ((total_priority as f64 * self.satisfaction_ratio).floor() as u64).max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let r = self.satisfaction_ratio;
        if !(r > 0.0 && r <= 1.0) {
            return Err(format!("satisfaction_ratio must be in (0, 1], got {r}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = SelectConfig::default();
        assert_eq!(config.satisfaction_threshold(16), 12);
        assert_eq!(config.satisfaction_threshold(55), 44);
        assert_eq!(config.satisfaction_threshold(5), 4);
        assert_eq!(config.satisfaction_threshold(1), 1);
        assert_eq!(config.satisfaction_threshold(0), 1);
    }

    #[test]
    fn test_exact_threshold_is_total() {
        assert_eq!(SelectConfig::exact().satisfaction_threshold(37), 37);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SelectConfig::default().validate().is_ok());
        assert!(SelectConfig::exact().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_ratio() {
        for r in [0.0, -0.5, 1.01, f64::NAN, f64::INFINITY] {
            let config = SelectConfig::default().with_satisfaction_ratio(r);
            assert!(config.validate().is_err(), "ratio {r} should be rejected");
        }
    }
}
