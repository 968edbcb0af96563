//! Time-budgeted activity selection.
//!
//! Chooses the subset of activities with the highest summed priority whose
//! summed duration fits a budget (0/1 knapsack). Solved by depth-first
//! branch-and-bound over density-ordered candidates, with an anytime
//! satisfaction cutoff instead of a dynamic program.
//!
//! # Key Components
//!
//! - [`density_order`]: ranks candidates by priority per unit of time
//! - [`SelectRunner`]: the bounded subset search
//! - [`SelectConfig`]: satisfaction ratio (default 80%)
//! - [`SelectResult`] / [`SearchStats`]: best selection and search counters
//!
//! # Optimality
//!
//! The result is optimal whenever it is below the satisfaction threshold.
//! Once a selection reaches the threshold the search stops, so the answer is
//! only guaranteed to be at least the threshold. Use [`SelectConfig::exact`]
//! to always get the optimum.
//!
//! # References
//!
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems"
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer
//!   Implementations", Ch. 2.5

#[cfg(feature = "parallel")]
mod batch;
mod config;
mod ordering;
mod runner;
mod types;

#[cfg(feature = "parallel")]
pub use batch::solve_batch;
pub use config::{SelectConfig, DEFAULT_SATISFACTION_RATIO};
pub use ordering::density_order;
pub use runner::{SearchStats, SelectResult, SelectRunner};
pub use types::PlanRequest;
