//! Single-period stock/bond split under a risk cap.

use log::debug;

use super::{best_split, validate_total_budget};
use crate::core::config::AllocationConfig;
use crate::core::types::{budget_capacity, BondYield, ItemSet, RiskLimit, Solution2D};
use crate::core::Result;
use crate::solvers::table::KnapsackTable;

/// Splits a budget between the stock knapsack and a fixed-yield bond.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAllocator;

impl RiskAllocator {
    /// Create a new allocator.
    pub fn new() -> Self {
        Self
    }

    /// Find the stock allocation `s <= min(risk cap, total_budget)`
    /// maximizing `stock_profit(s) + (total_budget - s) * bond_yield`.
    ///
    /// # Arguments
    /// * `items` - Stock opportunities
    /// * `bond_yield` - Bond rate as a fraction
    /// * `total_budget` - Capital to split
    /// * `risk_limit` - Cap on the stock share, absolute or fractional
    pub fn solve(
        &self,
        items: &ItemSet,
        bond_yield: impl Into<BondYield>,
        total_budget: f64,
        risk_limit: impl Into<RiskLimit>,
    ) -> Result<Solution2D> {
        validate_total_budget(total_budget)?;
        let bond_yield = bond_yield.into().validate()?;
        let risk_cap = risk_limit.into().cap(total_budget)?;
        let max_stock = budget_capacity(risk_cap)?;

        let table = KnapsackTable::build(items, max_stock, 1.0)?;
        let split = best_split(table.last_row(), total_budget, bond_yield.fraction());

        let stock_allocation = split.stock as f64;
        let solution = Solution2D {
            total_profit: split.total(),
            stock_allocation,
            bond_allocation: total_budget - stock_allocation,
            stock_profit: split.stock_profit,
            bond_profit: split.bond_profit,
            total_budget,
        };

        debug!(
            "risk split: budget {} cap {} -> stocks {} bonds {} profit {:.4}",
            total_budget,
            risk_cap,
            solution.stock_allocation,
            solution.bond_allocation,
            solution.total_profit
        );
        Ok(solution)
    }

    /// Solve with the budget, yield and risk limit from `config`.
    pub fn solve_config(&self, items: &ItemSet, config: &AllocationConfig) -> Result<Solution2D> {
        self.solve(items, config.bond_yield, config.total_budget, config.risk_limit)
    }
}

/// Split `total_budget` between `items` and bonds, stocks capped by `risk_limit`.
pub fn max_profit_2d(
    items: &ItemSet,
    bond_yield: impl Into<BondYield>,
    total_budget: f64,
    risk_limit: impl Into<RiskLimit>,
) -> Result<Solution2D> {
    RiskAllocator.solve(items, bond_yield, total_budget, risk_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AllocError;

    fn reference_items() -> ItemSet {
        ItemSet::from_pairs(&[(100, 10.0), (200, 30.0), (150, 20.0)]).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        // Cap 150: best stock subset is the 150-cost item (20), bonds 150 * 0.05 = 7.5
        let solution =
            max_profit_2d(&reference_items(), 0.05, 300.0, RiskLimit::fraction(0.5)).unwrap();

        assert!((solution.stock_allocation - 150.0).abs() < 1e-10);
        assert!((solution.bond_allocation - 150.0).abs() < 1e-10);
        assert!((solution.total_profit - 27.5).abs() < 1e-10);
        assert!((solution.stock_fraction() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_zero_risk_cap_is_pure_bonds() {
        let solution = max_profit_2d(&reference_items(), 0.05, 300.0, 0.0).unwrap();
        assert_eq!(solution.stock_allocation, 0.0);
        assert_eq!(solution.bond_allocation, 300.0);
        assert!((solution.total_profit - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_cap_above_budget_is_clamped() {
        let solution = max_profit_2d(&reference_items(), 0.05, 300.0, 1_000.0).unwrap();
        // Full 300 in stocks: 40 profit beats 100 stocks + 200 bonds (10 + 10)
        assert!((solution.stock_allocation - 300.0).abs() < 1e-10);
        assert_eq!(solution.bond_allocation, 0.0);
        assert!((solution.total_profit - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_profit_tie_reports_s_zero() {
        let items = ItemSet::from_pairs(&[(100, 0.0)]).unwrap();
        let solution = max_profit_2d(&items, 0.0, 300.0, 300.0).unwrap();
        assert_eq!(solution.stock_allocation, 0.0);
        assert_eq!(solution.bond_allocation, 300.0);
        assert_eq!(solution.total_profit, 0.0);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let err = max_profit_2d(&reference_items(), 0.05, -1.0, 0.5).unwrap_err();
        assert!(matches!(err, AllocError::InvalidParameter { .. }));
    }

    #[test]
    fn test_solve_config() {
        let config = AllocationConfig::default();
        let solution = RiskAllocator::new()
            .solve_config(&reference_items(), &config)
            .unwrap();
        assert!((solution.total_profit - 27.5).abs() < 1e-10);
    }
}
