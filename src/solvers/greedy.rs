//! Ratio-greedy baseline solver.

use log::debug;

use super::Solver;
use crate::core::types::{budget_capacity, ItemSet, Solution1D};
use crate::core::Result;

/// Heuristic that takes items in descending profit/cost order while they fit.
///
/// Not optimal. Used to measure how much the exact solver gains.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Item indices in the order the heuristic considers them.
    ///
    /// Descending ratio; zero-cost items first; equal ratios keep their
    /// input order.
    pub fn order(items: &ItemSet) -> Vec<usize> {
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| {
            let ra = items.as_slice()[a].ratio();
            let rb = items.as_slice()[b].ratio();
            rb.total_cmp(&ra)
        });
        order
    }

    /// Greedily fill `budget`, skipping items that no longer fit.
    pub fn solve(&self, items: &ItemSet, budget: f64) -> Result<Solution1D> {
        let mut remaining = budget_capacity(budget)? as u64;
        let mut solution = Solution1D::empty();

        for index in Self::order(items) {
            let item = items.as_slice()[index];
            if item.cost <= remaining {
                remaining -= item.cost;
                solution.max_profit += item.profit;
                solution.total_cost += item.cost;
                solution.chosen.push(index);
            }
        }
        solution.chosen.sort_unstable();

        debug!(
            "greedy: {} items, budget {} -> profit {:.4}, {} chosen",
            items.len(),
            budget,
            solution.max_profit,
            solution.num_chosen()
        );
        Ok(solution)
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, items: &ItemSet, budget: f64) -> Result<Solution1D> {
        GreedySolver::solve(self, items, budget)
    }
}

/// Run the ratio-greedy heuristic for `items` under `budget`.
pub fn greedy_approach(items: &ItemSet, budget: f64) -> Result<Solution1D> {
    GreedySolver.solve(items, budget)
}
