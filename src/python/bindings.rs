//! PyO3 function bindings for capalloc.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::allocation::{max_profit_2d, max_profit_3d};
use crate::analysis::{compare_algorithms, profit_curve as solve_curve};
use crate::core::types::{RiskLimit, Solution1D, Solution2D, Solution3D};
use crate::solvers::{greedy_approach as solve_greedy, max_profit_1d as solve_1d};

use super::numpy_bridge::*;

// ============================================================================
// Result Classes
// ============================================================================

/// Python-exposed single-budget selection.
#[pyclass]
#[derive(Debug, Clone)]
pub struct PySelection {
    #[pyo3(get)]
    pub max_profit: f64,
    #[pyo3(get)]
    pub total_cost: u64,
    chosen: Vec<usize>,
}

#[pymethods]
impl PySelection {
    /// Chosen item indices as an int64 array.
    #[getter]
    fn chosen<'py>(&self, py: Python<'py>) -> &'py PyArray1<i64> {
        indices_to_numpy(py, &self.chosen)
    }

    fn __repr__(&self) -> String {
        format!(
            "Selection(profit={:.2}, cost={}, items={:?})",
            self.max_profit, self.total_cost, self.chosen
        )
    }
}

impl From<Solution1D> for PySelection {
    fn from(s: Solution1D) -> Self {
        Self {
            max_profit: s.max_profit,
            total_cost: s.total_cost,
            chosen: s.chosen,
        }
    }
}

/// Python-exposed stock/bond split.
#[pyclass]
#[derive(Debug, Clone)]
pub struct PySplit {
    #[pyo3(get)]
    pub total_profit: f64,
    #[pyo3(get)]
    pub stock_allocation: f64,
    #[pyo3(get)]
    pub bond_allocation: f64,
    #[pyo3(get)]
    pub stock_profit: f64,
    #[pyo3(get)]
    pub bond_profit: f64,
    #[pyo3(get)]
    pub stock_fraction: f64,
    #[pyo3(get)]
    pub periods: usize,
}

#[pymethods]
impl PySplit {
    fn __repr__(&self) -> String {
        format!(
            "Split(profit={:.2}, stocks={:.2}, bonds={:.2}, periods={})",
            self.total_profit, self.stock_allocation, self.bond_allocation, self.periods
        )
    }
}

impl From<Solution2D> for PySplit {
    fn from(s: Solution2D) -> Self {
        Self {
            total_profit: s.total_profit,
            stock_allocation: s.stock_allocation,
            bond_allocation: s.bond_allocation,
            stock_profit: s.stock_profit,
            bond_profit: s.bond_profit,
            stock_fraction: s.stock_fraction(),
            periods: 1,
        }
    }
}

impl From<Solution3D> for PySplit {
    fn from(s: Solution3D) -> Self {
        Self {
            total_profit: s.total_profit,
            stock_allocation: s.stock_allocation,
            bond_allocation: s.bond_allocation,
            stock_profit: s.stock_profit,
            bond_profit: s.bond_profit,
            stock_fraction: s.stock_fraction(),
            periods: s.periods,
        }
    }
}

/// Python-exposed knapsack vs greedy comparison.
#[pyclass]
#[derive(Debug, Clone)]
pub struct PyComparison {
    #[pyo3(get)]
    pub optimal: PySelection,
    #[pyo3(get)]
    pub greedy: PySelection,
    #[pyo3(get)]
    pub gap: f64,
    #[pyo3(get)]
    pub gap_pct: Option<f64>,
}

fn parse_risk_limit(value: f64, mode: &str) -> PyResult<RiskLimit> {
    match mode {
        "fraction" => Ok(RiskLimit::Fraction(value)),
        "absolute" => Ok(RiskLimit::Absolute(value)),
        other => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "Unknown risk mode '{other}', expected 'fraction' or 'absolute'"
        ))),
    }
}

// ============================================================================
// Solver Functions
// ============================================================================

/// Exact 0/1 knapsack under a budget.
#[pyfunction]
pub fn max_profit_1d(
    costs: PyReadonlyArray1<i64>,
    profits: PyReadonlyArray1<f64>,
    budget: f64,
) -> PyResult<PySelection> {
    let items = numpy_to_items(costs, profits)?;
    Ok(solve_1d(&items, budget)?.into())
}

/// Ratio-greedy heuristic under a budget.
#[pyfunction]
pub fn greedy_approach(
    costs: PyReadonlyArray1<i64>,
    profits: PyReadonlyArray1<f64>,
    budget: f64,
) -> PyResult<PySelection> {
    let items = numpy_to_items(costs, profits)?;
    Ok(solve_greedy(&items, budget)?.into())
}

/// Single-period stock/bond split.
#[pyfunction]
#[pyo3(name = "max_profit_2d", signature = (costs, profits, bond_yield, total_budget, risk_limit, risk_mode="fraction"))]
pub fn py_max_profit_2d(
    costs: PyReadonlyArray1<i64>,
    profits: PyReadonlyArray1<f64>,
    bond_yield: f64,
    total_budget: f64,
    risk_limit: f64,
    risk_mode: &str,
) -> PyResult<PySplit> {
    let items = numpy_to_items(costs, profits)?;
    let risk = parse_risk_limit(risk_limit, risk_mode)?;
    Ok(max_profit_2d(&items, bond_yield, total_budget, risk)?.into())
}

/// Multi-period stock/bond split.
#[pyfunction]
#[pyo3(name = "max_profit_3d", signature = (costs, profits, bond_yield, total_budget, risk_limit, periods, risk_mode="fraction"))]
pub fn py_max_profit_3d(
    costs: PyReadonlyArray1<i64>,
    profits: PyReadonlyArray1<f64>,
    bond_yield: f64,
    total_budget: f64,
    risk_limit: f64,
    periods: usize,
    risk_mode: &str,
) -> PyResult<PySplit> {
    let items = numpy_to_items(costs, profits)?;
    let risk = parse_risk_limit(risk_limit, risk_mode)?;
    Ok(max_profit_3d(&items, bond_yield, total_budget, risk, periods)?.into())
}

/// Knapsack profit at evenly spaced budgets. Returns `(budgets, profits)`.
#[pyfunction]
#[pyo3(signature = (costs, profits, max_budget, steps=20))]
pub fn profit_curve<'py>(
    py: Python<'py>,
    costs: PyReadonlyArray1<i64>,
    profits: PyReadonlyArray1<f64>,
    max_budget: f64,
    steps: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let items = numpy_to_items(costs, profits)?;
    let points = py.allow_threads(|| solve_curve(&items, max_budget, steps))?;
    let budgets = points.iter().map(|p| p.budget).collect();
    let curve = points.iter().map(|p| p.profit).collect();
    Ok((vec_to_numpy_f64(py, budgets), vec_to_numpy_f64(py, curve)))
}

/// Knapsack vs greedy at one budget.
#[pyfunction]
#[pyo3(name = "compare_algorithms")]
pub fn py_compare_algorithms(
    costs: PyReadonlyArray1<i64>,
    profits: PyReadonlyArray1<f64>,
    budget: f64,
) -> PyResult<PyComparison> {
    let items = numpy_to_items(costs, profits)?;
    let cmp = compare_algorithms(&items, budget)?;
    Ok(PyComparison {
        optimal: cmp.optimal.into(),
        greedy: cmp.baseline.into(),
        gap: cmp.gap,
        gap_pct: cmp.gap_pct,
    })
}
