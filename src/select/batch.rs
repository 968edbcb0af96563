//! Parallel solving of independent requests.

use rayon::prelude::*;

use super::config::SelectConfig;
use super::runner::SelectResult;
use super::types::PlanRequest;
use crate::error::Result;

/// Solves every request on the rayon pool.
///
/// Each request runs its own search with its own best-result state;
/// results come back in request order.
pub fn solve_batch(requests: &[PlanRequest], config: &SelectConfig) -> Vec<Result<SelectResult>> {
    requests.par_iter().map(|r| r.solve(config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Activity;

    #[test]
    fn test_batch_matches_sequential() {
        let requests: Vec<PlanRequest> = (0..16)
            .map(|k| {
                let acts = (0..8)
                    .map(|i| {
                        let duration = 5 + (i * 7 + k) % 20;
                        let priority = 1 + (i * 3 + k) as u32 % 10;
                        Activity::new(format!("a{i}"), duration, priority)
                    })
                    .collect();
                PlanRequest::new(acts, 30 + k)
            })
            .collect();
        let config = SelectConfig::default();

        let parallel = solve_batch(&requests, &config);
        for (req, res) in requests.iter().zip(parallel) {
            let seq = req.solve(&config).unwrap();
            assert_eq!(res.unwrap(), seq);
        }
    }

    #[test]
    fn test_batch_keeps_errors_per_request() {
        let requests = vec![
            PlanRequest::new(vec![Activity::new("ok", 5, 5)], 10),
            PlanRequest::new(vec![Activity::new("ok", 5, 5)], -1),
        ];
        let results = solve_batch(&requests, &SelectConfig::default());
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
