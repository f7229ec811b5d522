// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![allow(non_local_definitions)]

//! capalloc - Dynamic-programming capital allocation.
//!
//! This crate provides:
//! - Exact 0/1 knapsack selection of stock opportunities under a budget
//! - A ratio-greedy baseline behind the same `Solver` interface
//! - Stock/bond budget splits under a risk cap, single- and multi-period
//! - Solver comparison, profit curves and scenario batches

pub mod allocation;
pub mod analysis;
pub mod core;
#[cfg(feature = "python")]
pub mod python;
pub mod solvers;

pub use crate::allocation::{max_profit_2d, max_profit_3d, HorizonAllocator, RiskAllocator};
pub use crate::core::{
    AllocError, AllocationConfig, BondYield, Item, ItemSet, Result, RiskLimit, Solution1D,
    Solution2D, Solution3D,
};
pub use crate::solvers::{greedy_approach, max_profit_1d, GreedySolver, KnapsackSolver, Solver};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _capalloc(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    // Register result classes
    m.add_class::<python::bindings::PySelection>()?;
    m.add_class::<python::bindings::PySplit>()?;
    m.add_class::<python::bindings::PyComparison>()?;

    // Register solver functions
    m.add_function(wrap_pyfunction!(python::bindings::max_profit_1d, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::greedy_approach, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::py_max_profit_2d, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::py_max_profit_3d, m)?)?;

    // Register analysis functions
    m.add_function(wrap_pyfunction!(python::bindings::profit_curve, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::py_compare_algorithms, m)?)?;

    Ok(())
}
