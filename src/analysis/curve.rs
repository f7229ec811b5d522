//! Profit as a function of budget.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::error::AllocError;
use crate::core::types::{ItemSet, Profit};
use crate::core::Result;
use crate::solvers::KnapsackSolver;

/// Optimal knapsack profit at one budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub budget: f64,
    pub profit: Profit,
    pub items_chosen: usize,
}

impl CurvePoint {
    /// Profit as a fraction of `peak`, in `[0, 1]`. Zero when `peak` is zero.
    pub fn relative_to(&self, peak: Profit) -> f64 {
        if peak <= 0.0 {
            0.0
        } else {
            (self.profit / peak).clamp(0.0, 1.0)
        }
    }
}

/// Solve the knapsack at `steps` evenly spaced budgets up to `max_budget`.
///
/// Point `k` (1-based) uses budget `max_budget / steps * k`. Points are
/// solved in parallel and returned in ascending budget order.
pub fn profit_curve(items: &ItemSet, max_budget: f64, steps: usize) -> Result<Vec<CurvePoint>> {
    if steps == 0 {
        return Err(AllocError::invalid_parameter("steps must be >= 1"));
    }
    if !max_budget.is_finite() || max_budget < 0.0 {
        return Err(AllocError::invalid_parameter(format!(
            "max_budget must be finite and >= 0, got {max_budget}"
        )));
    }

    let step = max_budget / steps as f64;
    (1..=steps)
        .into_par_iter()
        .map(|k| -> Result<CurvePoint> {
            let budget = step * k as f64;
            let solution = KnapsackSolver.solve(items, budget)?;
            Ok(CurvePoint {
                budget,
                profit: solution.max_profit,
                items_chosen: solution.num_chosen(),
            })
        })
        .collect()
}

/// Highest profit on the curve, 0 for an empty curve.
pub fn peak_profit(points: &[CurvePoint]) -> Profit {
    points.iter().map(|p| p.profit).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_items() -> ItemSet {
        ItemSet::from_pairs(&[(100, 10.0), (200, 30.0), (150, 20.0), (80, 15.0), (120, 25.0)])
            .unwrap()
    }

    #[test]
    fn test_curve_budgets_and_order() {
        let points = profit_curve(&demo_items(), 450.0, 10).unwrap();
        assert_eq!(points.len(), 10);
        assert!((points[0].budget - 45.0).abs() < 1e-10);
        assert!((points[9].budget - 450.0).abs() < 1e-10);
        assert!(points.windows(2).all(|w| w[1].budget > w[0].budget));
    }

    #[test]
    fn test_curve_monotone() {
        let points = profit_curve(&demo_items(), 450.0, 10).unwrap();
        assert!(points.windows(2).all(|w| w[1].profit >= w[0].profit));
        // Nothing fits under 80
        assert_eq!(points[0].profit, 0.0);
    }

    #[test]
    fn test_relative_to_peak() {
        let points = profit_curve(&demo_items(), 450.0, 10).unwrap();
        let peak = peak_profit(&points);
        assert!((points[9].relative_to(peak) - 1.0).abs() < 1e-12);
        assert_eq!(points[0].relative_to(peak), 0.0);
        assert_eq!(points[9].relative_to(0.0), 0.0);
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(profit_curve(&demo_items(), 450.0, 0).is_err());
    }
}
