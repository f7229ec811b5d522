//! Exact 0/1 knapsack solver.

use log::debug;

use super::table::KnapsackTable;
use super::Solver;
use crate::core::types::{budget_capacity, ItemSet, Solution1D};
use crate::core::Result;

/// Dynamic-programming solver that maximizes profit under a budget, each
/// item used at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackSolver;

impl KnapsackSolver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve for the most profitable subset with total cost `<= budget`.
    ///
    /// The budget is truncated to an integer capacity. Negative and zero
    /// budgets are valid and leave only zero-cost items affordable.
    pub fn solve(&self, items: &ItemSet, budget: f64) -> Result<Solution1D> {
        let capacity = budget_capacity(budget)?;
        if items.is_empty() {
            return Ok(Solution1D::empty());
        }

        let table = KnapsackTable::build(items, capacity, 1.0)?;
        let chosen = table.reconstruct(capacity);
        let solution = Solution1D {
            max_profit: table.best(capacity),
            total_cost: items.cost_of(&chosen),
            chosen,
        };

        debug!(
            "knapsack: {} items, capacity {} -> profit {:.4}, {} chosen",
            items.len(),
            capacity,
            solution.max_profit,
            solution.num_chosen()
        );
        Ok(solution)
    }
}

impl Solver for KnapsackSolver {
    fn name(&self) -> &'static str {
        "dynamic_programming"
    }

    fn solve(&self, items: &ItemSet, budget: f64) -> Result<Solution1D> {
        KnapsackSolver::solve(self, items, budget)
    }
}

/// Solve the 0/1 knapsack for `items` under `budget`.
pub fn max_profit_1d(items: &ItemSet, budget: f64) -> Result<Solution1D> {
    KnapsackSolver.solve(items, budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let items = ItemSet::from_pairs(&[(100, 10.0), (200, 30.0), (150, 20.0)]).unwrap();
        let solution = max_profit_1d(&items, 300.0).unwrap();

        assert!((solution.max_profit - 40.0).abs() < 1e-10);
        assert_eq!(solution.chosen, vec![0, 1]);
        assert_eq!(solution.total_cost, 300);
    }

    #[test]
    fn test_empty_items() {
        let solution = max_profit_1d(&ItemSet::default(), 300.0).unwrap();
        assert_eq!(solution, Solution1D::empty());
    }

    #[test]
    fn test_non_positive_budget() {
        let items = ItemSet::from_pairs(&[(100, 10.0)]).unwrap();
        assert_eq!(max_profit_1d(&items, 0.0).unwrap(), Solution1D::empty());
        assert_eq!(max_profit_1d(&items, -50.0).unwrap(), Solution1D::empty());
    }

    #[test]
    fn test_all_items_too_expensive() {
        let items = ItemSet::from_pairs(&[(400, 10.0), (500, 30.0)]).unwrap();
        let solution = max_profit_1d(&items, 300.0).unwrap();
        assert_eq!(solution.max_profit, 0.0);
        assert!(solution.chosen.is_empty());
    }

    #[test]
    fn test_fractional_budget_truncated() {
        let items = ItemSet::from_pairs(&[(100, 10.0), (200, 30.0)]).unwrap();
        let solution = max_profit_1d(&items, 299.99).unwrap();
        assert!((solution.max_profit - 30.0).abs() < 1e-10);
        assert_eq!(solution.chosen, vec![1]);
    }

    #[test]
    fn test_zero_cost_item_always_taken() {
        let items = ItemSet::from_pairs(&[(100, 10.0), (0, 5.0)]).unwrap();

        let solution = max_profit_1d(&items, 0.0).unwrap();
        assert_eq!(solution.chosen, vec![1]);
        assert!((solution.max_profit - 5.0).abs() < 1e-10);

        let solution = max_profit_1d(&items, 100.0).unwrap();
        assert_eq!(solution.chosen, vec![0, 1]);
        assert_eq!(solution.total_cost, 100);
    }

    #[test]
    fn test_nan_budget_rejected() {
        let items = ItemSet::from_pairs(&[(100, 10.0)]).unwrap();
        assert!(max_profit_1d(&items, f64::NAN).is_err());
    }
}
