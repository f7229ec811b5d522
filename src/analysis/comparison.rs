//! Side-by-side comparison of two single-budget solvers.

use serde::{Deserialize, Serialize};

use crate::core::types::{ItemSet, Solution1D};
use crate::core::Result;
use crate::solvers::{GreedySolver, KnapsackSolver, Solver};

/// Two solutions for the same items and budget, and the profit gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverComparison {
    /// Name of the solver treated as the reference.
    pub optimal_name: String,
    /// Name of the solver being measured against it.
    pub baseline_name: String,
    pub optimal: Solution1D,
    pub baseline: Solution1D,
    /// `optimal.max_profit - baseline.max_profit`.
    pub gap: f64,
    /// Gap relative to the baseline in percent; `None` when the baseline
    /// earned nothing.
    pub gap_pct: Option<f64>,
}

impl SolverComparison {
    /// Whether the reference solver earned strictly more.
    pub fn optimal_wins(&self) -> bool {
        self.gap > crate::core::types::PROFIT_EPSILON
    }
}

/// Run `optimal` and `baseline` on the same input.
pub fn compare_solvers(
    items: &ItemSet,
    budget: f64,
    optimal: &dyn Solver,
    baseline: &dyn Solver,
) -> Result<SolverComparison> {
    let optimal_solution = optimal.solve(items, budget)?;
    let baseline_solution = baseline.solve(items, budget)?;

    let gap = optimal_solution.max_profit - baseline_solution.max_profit;
    let gap_pct = if baseline_solution.max_profit > 0.0 {
        Some((optimal_solution.max_profit / baseline_solution.max_profit - 1.0) * 100.0)
    } else {
        None
    };

    Ok(SolverComparison {
        optimal_name: optimal.name().to_string(),
        baseline_name: baseline.name().to_string(),
        optimal: optimal_solution,
        baseline: baseline_solution,
        gap,
        gap_pct,
    })
}

/// Compare the exact knapsack solver with the greedy heuristic.
pub fn compare_algorithms(items: &ItemSet, budget: f64) -> Result<SolverComparison> {
    compare_solvers(items, budget, &KnapsackSolver, &GreedySolver)
}
