//! Multi-period stock/bond split with flat profit amortization.
//!
//! Every item's profit is spread evenly over the horizon (`profit / periods`
//! per period, no compounding). The stock positions are chosen once and held
//! for every period, while bonds accrue `allocation * yield` each period.

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use super::{best_split, validate_total_budget};
use crate::core::config::AllocationConfig;
use crate::core::error::AllocError;
use crate::core::types::{
    budget_capacity, check_table_size, table_width, BondYield, ItemSet, RiskLimit, Solution3D,
};
use crate::core::Result;
use crate::solvers::table::KnapsackTable;

/// Three-dimensional DP table indexed by `(period, items processed, capacity)`.
///
/// Layer 0 is the knapsack over per-period amortized profits. Layer `t`
/// carries layer `t - 1` forward at the same `(item, capacity)` cell and adds
/// one more period of the layer-0 value, so a capacity allocation keeps the
/// same positions for the whole horizon. Layer 0 lives in its knapsack table
/// and the remaining `periods - 1` layers in one flat arena.
#[derive(Debug, Clone)]
pub struct HorizonTable {
    periods: usize,
    rows: usize,
    width: usize,
    first: KnapsackTable,
    later: Vec<f64>,
}

impl HorizonTable {
    /// Fill the table for `periods` periods up to `capacity`.
    pub fn build(
        items: &ItemSet,
        capacity: usize,
        periods: usize,
        cancel: Option<&AtomicBool>,
    ) -> Result<Self> {
        if periods == 0 {
            return Err(AllocError::invalid_parameter("periods must be >= 1"));
        }
        let rows = items.len() + 1;
        let width = table_width(capacity)?;
        check_table_size(&[periods, rows, width])?;

        let is_cancelled = || cancel.is_some_and(|flag| flag.load(Ordering::Relaxed));
        if is_cancelled() {
            return Err(AllocError::cancelled(format!("period 1 of {periods}")));
        }

        let first = KnapsackTable::build(items, capacity, 1.0 / periods as f64)?;
        let layer = rows * width;
        let mut later = vec![0.0; (periods - 1) * layer];

        for t in 1..periods {
            if is_cancelled() {
                return Err(AllocError::cancelled(format!("period {} of {}", t + 1, periods)));
            }
            let (done, rest) = later.split_at_mut((t - 1) * layer);
            let prev: &[f64] = if t == 1 {
                first.cells()
            } else {
                &done[(t - 2) * layer..]
            };
            let curr = &mut rest[..layer];
            for ((cell, &carried), &per_period) in curr.iter_mut().zip(prev).zip(first.cells()) {
                *cell = carried + per_period;
            }
        }

        Ok(Self {
            periods,
            rows,
            width,
            first,
            later,
        })
    }

    /// Number of periods.
    #[inline]
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Largest capacity in the table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.width - 1
    }

    /// Total cells held across all layers.
    pub fn num_cells(&self) -> usize {
        self.first.cells().len() + self.later.len()
    }

    fn layer(&self, t: usize) -> &[f64] {
        if t == 0 {
            self.first.cells()
        } else {
            let size = self.rows * self.width;
            &self.later[(t - 1) * size..t * size]
        }
    }

    /// Accumulated profit after `period` (1-based) using the first `items`
    /// items at `capacity`.
    pub fn value(&self, period: usize, items: usize, capacity: usize) -> f64 {
        let t = period.clamp(1, self.periods) - 1;
        self.layer(t)[items * self.width + capacity]
    }

    /// Accumulated profit at each capacity after the final period.
    pub fn final_row(&self) -> &[f64] {
        let start = (self.rows - 1) * self.width;
        &self.layer(self.periods - 1)[start..start + self.width]
    }

    /// Items held at `capacity`, ascending.
    pub fn reconstruct(&self, capacity: usize) -> Vec<usize> {
        self.first.reconstruct(capacity)
    }
}

/// Splits a budget between held stock positions and bonds over a horizon.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizonAllocator;

impl HorizonAllocator {
    /// Create a new allocator.
    pub fn new() -> Self {
        Self
    }

    /// Find the stock allocation maximizing amortized stock profit plus
    /// `bond_allocation * bond_yield * periods`.
    ///
    /// With `periods == 1` this is the single-period risk split.
    pub fn solve(
        &self,
        items: &ItemSet,
        bond_yield: impl Into<BondYield>,
        total_budget: f64,
        risk_limit: impl Into<RiskLimit>,
        periods: usize,
    ) -> Result<Solution3D> {
        self.run(
            items,
            bond_yield.into(),
            total_budget,
            risk_limit.into(),
            periods,
            None,
        )
    }

    /// Like [`solve`](Self::solve), checking `cancel` between periods.
    ///
    /// Returns [`AllocError::Cancelled`] once the flag is observed set.
    pub fn solve_with_cancel(
        &self,
        items: &ItemSet,
        bond_yield: impl Into<BondYield>,
        total_budget: f64,
        risk_limit: impl Into<RiskLimit>,
        periods: usize,
        cancel: &AtomicBool,
    ) -> Result<Solution3D> {
        self.run(
            items,
            bond_yield.into(),
            total_budget,
            risk_limit.into(),
            periods,
            Some(cancel),
        )
    }

    /// Solve with the budget, yield, risk limit and horizon from `config`.
    pub fn solve_config(&self, items: &ItemSet, config: &AllocationConfig) -> Result<Solution3D> {
        self.solve(
            items,
            config.bond_yield,
            config.total_budget,
            config.risk_limit,
            config.periods,
        )
    }

    fn run(
        &self,
        items: &ItemSet,
        bond_yield: BondYield,
        total_budget: f64,
        risk_limit: RiskLimit,
        periods: usize,
        cancel: Option<&AtomicBool>,
    ) -> Result<Solution3D> {
        if periods == 0 {
            return Err(AllocError::invalid_parameter("periods must be >= 1"));
        }
        validate_total_budget(total_budget)?;
        let bond_yield = bond_yield.validate()?;
        let risk_cap = risk_limit.cap(total_budget)?;
        let max_stock = budget_capacity(risk_cap)?;

        let table = HorizonTable::build(items, max_stock, periods, cancel)?;
        let bond_rate = bond_yield.fraction() * periods as f64;
        let split = best_split(table.final_row(), total_budget, bond_rate);

        let stock_allocation = split.stock as f64;
        let solution = Solution3D {
            total_profit: split.total(),
            stock_allocation,
            bond_allocation: total_budget - stock_allocation,
            stock_profit: split.stock_profit,
            bond_profit: split.bond_profit,
            total_budget,
            periods,
            chosen: table.reconstruct(split.stock),
        };

        debug!(
            "horizon split: budget {} cap {} periods {} -> stocks {} bonds {} profit {:.4}",
            total_budget,
            risk_cap,
            periods,
            solution.stock_allocation,
            solution.bond_allocation,
            solution.total_profit
        );
        Ok(solution)
    }
}

/// Split `total_budget` between held `items` and bonds over `periods` periods.
pub fn max_profit_3d(
    items: &ItemSet,
    bond_yield: impl Into<BondYield>,
    total_budget: f64,
    risk_limit: impl Into<RiskLimit>,
    periods: usize,
) -> Result<Solution3D> {
    HorizonAllocator.solve(items, bond_yield, total_budget, risk_limit, periods)
}
