//! All allocators run against one configuration.

use log::info;
use serde::{Deserialize, Serialize};

use super::comparison::{compare_algorithms, SolverComparison};
use super::curve::{profit_curve, CurvePoint};
use crate::allocation::{HorizonAllocator, RiskAllocator};
use crate::core::config::AllocationConfig;
use crate::core::types::{ItemSet, Solution1D, Solution2D, Solution3D};
use crate::core::Result;

/// Results of every solver for one item set and configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub config: AllocationConfig,
    /// Exact knapsack at the full budget.
    pub knapsack: Solution1D,
    /// Greedy heuristic at the full budget.
    pub greedy: Solution1D,
    /// Single-period stock/bond split.
    pub risk_split: Solution2D,
    /// Multi-period stock/bond split.
    pub horizon_split: Solution3D,
    pub comparison: SolverComparison,
    /// Knapsack profit over budgets up to `config.curve_max_budget()`.
    pub profit_curve: Vec<CurvePoint>,
}

impl PortfolioReport {
    /// Validate `config` and run every solver on `items`.
    pub fn build(items: &ItemSet, config: &AllocationConfig) -> Result<Self> {
        config.validate()?;

        let comparison = compare_algorithms(items, config.total_budget)?;
        let risk_split = RiskAllocator.solve_config(items, config)?;
        let horizon_split = HorizonAllocator.solve_config(items, config)?;
        let profit_curve = profit_curve(items, config.curve_max_budget(), config.curve_steps)?;

        info!(
            "report: {} items, budget {} -> knapsack {:.2}, greedy {:.2}, 2d {:.2}, {}-period {:.2}",
            items.len(),
            config.total_budget,
            comparison.optimal.max_profit,
            comparison.baseline.max_profit,
            risk_split.total_profit,
            config.periods,
            horizon_split.total_profit
        );

        Ok(Self {
            config: config.clone(),
            knapsack: comparison.optimal.clone(),
            greedy: comparison.baseline.clone(),
            risk_split,
            horizon_split,
            comparison,
            profit_curve,
        })
    }
}
