//! Numpy array conversion helpers.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::types::ItemSet;

/// Convert numpy array to Vec<f64>, copying non-contiguous input.
pub fn numpy_to_vec_f64(arr: PyReadonlyArray1<f64>) -> Vec<f64> {
    arr.as_array().to_vec()
}

/// Convert numpy array to Vec<i64>, copying non-contiguous input.
pub fn numpy_to_vec_i64(arr: PyReadonlyArray1<i64>) -> Vec<i64> {
    arr.as_array().to_vec()
}

/// Build a validated item set from cost and profit columns.
pub fn numpy_to_items(
    costs: PyReadonlyArray1<i64>,
    profits: PyReadonlyArray1<f64>,
) -> PyResult<ItemSet> {
    let costs = numpy_to_vec_i64(costs);
    let profits = numpy_to_vec_f64(profits);
    Ok(ItemSet::from_columns(&costs, &profits)?)
}

/// Convert Vec<f64> to numpy array.
pub fn vec_to_numpy_f64<'py>(py: Python<'py>, vec: Vec<f64>) -> &'py PyArray1<f64> {
    PyArray1::from_vec(py, vec)
}

/// Convert Vec<usize> to an int64 numpy array.
pub fn indices_to_numpy<'py>(py: Python<'py>, indices: &[usize]) -> &'py PyArray1<i64> {
    PyArray1::from_vec(py, indices.iter().map(|&i| i as i64).collect())
}
