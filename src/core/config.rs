//! Allocation configuration.

use serde::{Deserialize, Serialize};

use super::error::{AllocError, Result};
use super::types::{BondYield, RiskLimit};

/// Parameters shared by the allocators and the portfolio report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Total capital to split between stocks and bonds.
    pub total_budget: f64,
    /// Per-period bond yield as a fraction.
    pub bond_yield: BondYield,
    /// Cap on the stock share of the budget.
    pub risk_limit: RiskLimit,
    /// Number of periods in the holding horizon.
    pub periods: usize,
    /// Number of budget points sampled for the profit curve.
    pub curve_steps: usize,
    /// Profit curve extends to `total_budget * curve_budget_multiplier`.
    pub curve_budget_multiplier: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            total_budget: 300.0,
            bond_yield: BondYield::from_fraction(0.05),
            risk_limit: RiskLimit::Fraction(0.5),
            periods: 3,
            curve_steps: 20,
            curve_budget_multiplier: 1.5,
        }
    }
}

impl AllocationConfig {
    /// Create a config for the given budget, other fields at defaults.
    pub fn new(total_budget: f64) -> Self {
        Self {
            total_budget,
            ..Default::default()
        }
    }

    /// Set bond yield.
    pub fn with_bond_yield(mut self, bond_yield: impl Into<BondYield>) -> Self {
        self.bond_yield = bond_yield.into();
        self
    }

    /// Set risk limit.
    pub fn with_risk_limit(mut self, risk_limit: RiskLimit) -> Self {
        self.risk_limit = risk_limit;
        self
    }

    /// Set horizon length.
    pub fn with_periods(mut self, periods: usize) -> Self {
        self.periods = periods;
        self
    }

    /// Set profit curve resolution.
    pub fn with_curve_steps(mut self, steps: usize) -> Self {
        self.curve_steps = steps;
        self
    }

    /// Absolute stock cap implied by the risk limit.
    pub fn risk_cap(&self) -> Result<f64> {
        self.risk_limit.cap(self.total_budget)
    }

    /// Upper budget of the profit curve.
    pub fn curve_max_budget(&self) -> f64 {
        self.total_budget * self.curve_budget_multiplier
    }

    /// Validate all fields.
    pub fn validate(&self) -> Result<()> {
        if !self.total_budget.is_finite() || self.total_budget < 0.0 {
            return Err(AllocError::invalid_parameter(format!(
                "total_budget must be finite and >= 0, got {}",
                self.total_budget
            )));
        }
        self.bond_yield.validate()?;
        self.risk_cap()?;
        if self.periods == 0 {
            return Err(AllocError::invalid_parameter("periods must be >= 1"));
        }
        if self.curve_steps == 0 {
            return Err(AllocError::invalid_parameter("curve_steps must be >= 1"));
        }
        if !self.curve_budget_multiplier.is_finite() || self.curve_budget_multiplier < 0.0 {
            return Err(AllocError::invalid_parameter(
                "curve_budget_multiplier must be finite and >= 0",
            ));
        }
        Ok(())
    }
}
