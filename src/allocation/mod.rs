//! Stock/bond budget allocators.
//!
//! Both allocators fill a knapsack table up to the risk cap once, then scan
//! every candidate stock allocation `s` against the linear bond return on the
//! remainder `total_budget - s`.

pub mod horizon;
pub mod risk;

pub use horizon::{max_profit_3d, HorizonAllocator, HorizonTable};
pub use risk::{max_profit_2d, RiskAllocator};

use log::trace;

use crate::core::error::{AllocError, Result};

/// Best stock/bond split found by [`best_split`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Split {
    pub stock: usize,
    pub stock_profit: f64,
    pub bond_profit: f64,
}

impl Split {
    #[inline]
    pub fn total(&self) -> f64 {
        self.stock_profit + self.bond_profit
    }
}

/// Scan `stock_profits[s]` for every `s` and keep the split maximizing
/// `stock_profits[s] + (total_budget - s) * bond_rate`.
///
/// Ties keep the smallest `s`; `s = 0` is always a candidate.
pub(crate) fn best_split(stock_profits: &[f64], total_budget: f64, bond_rate: f64) -> Split {
    let mut best = Split {
        stock: 0,
        stock_profit: stock_profits.first().copied().unwrap_or(0.0),
        bond_profit: total_budget * bond_rate,
    };

    for (s, &stock_profit) in stock_profits.iter().enumerate().skip(1) {
        let candidate = Split {
            stock: s,
            stock_profit,
            bond_profit: (total_budget - s as f64) * bond_rate,
        };
        trace!(
            "split s={} stock={:.4} bond={:.4} total={:.4}",
            s,
            candidate.stock_profit,
            candidate.bond_profit,
            candidate.total()
        );
        if candidate.total() > best.total() {
            best = candidate;
        }
    }

    best
}

/// Reject negative or non-finite total budgets.
pub(crate) fn validate_total_budget(total_budget: f64) -> Result<()> {
    if !total_budget.is_finite() || total_budget < 0.0 {
        return Err(AllocError::invalid_parameter(format!(
            "total budget must be finite and >= 0, got {total_budget}"
        )));
    }
    Ok(())
}
