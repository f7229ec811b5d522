//! Single-budget item selection solvers.

pub mod greedy;
pub mod knapsack;
pub mod table;

pub use greedy::{greedy_approach, GreedySolver};
pub use knapsack::{max_profit_1d, KnapsackSolver};
pub use table::KnapsackTable;

use crate::core::types::{ItemSet, Solution1D};
use crate::core::Result;

/// Strategy for choosing items under a single budget.
///
/// Implementations share the [`Solution1D`] result shape so a caller can run
/// several against the same input and compare them.
pub trait Solver: Send + Sync {
    /// Short identifier for reports.
    fn name(&self) -> &'static str;

    /// Choose items with total cost `<= budget`.
    fn solve(&self, items: &ItemSet, budget: f64) -> Result<Solution1D>;
}
