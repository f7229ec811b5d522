//! Flat-arena 0/1 knapsack table shared by all DP solvers.

use log::{debug, warn};

use crate::core::types::{check_table_size, table_width, ItemSet};
use crate::core::Result;

/// `(items + 1) × (capacity + 1)` knapsack table stored row-major in one
/// allocation.
///
/// Row `i` holds the best profit using only the first `i` items at every
/// capacity `0..=capacity`. Rows are disjoint slices of the arena. Cell
/// values are "best at cost <= j", so every row is non-decreasing in `j`.
#[derive(Debug, Clone)]
pub struct KnapsackTable {
    width: usize,
    rows: usize,
    cells: Vec<f64>,
    costs: Vec<u64>,
}

impl KnapsackTable {
    /// Fill the table for `items` up to `capacity`, multiplying every profit
    /// by `scale`.
    ///
    /// Items costing more than `capacity` keep the row above unchanged. An
    /// item is taken only when it strictly improves the cell, which fixes the
    /// tie-break for a given input order. Zero-cost items are always taken,
    /// including those with zero profit.
    pub fn build(items: &ItemSet, capacity: usize, scale: f64) -> Result<Self> {
        let width = table_width(capacity)?;
        let rows = items.len() + 1;
        check_table_size(&[rows, width])?;

        let mut cells = vec![0.0; rows * width];
        let mut excluded = 0usize;

        for (i, item) in items.iter().enumerate() {
            let (done, rest) = cells.split_at_mut((i + 1) * width);
            let prev = &done[i * width..];
            let curr = &mut rest[..width];
            curr.copy_from_slice(prev);

            if item.cost > capacity as u64 {
                excluded += 1;
                continue;
            }

            let cost = item.cost as usize;
            let profit = item.profit * scale;
            if cost == 0 {
                for cell in curr.iter_mut() {
                    *cell += profit;
                }
                continue;
            }
            for j in cost..width {
                let candidate = prev[j - cost] + profit;
                if candidate > curr[j] {
                    curr[j] = candidate;
                }
            }
        }

        if excluded > 0 {
            warn!(
                "{} of {} items exceed capacity {} and were excluded",
                excluded,
                items.len(),
                capacity
            );
        }
        debug!("knapsack table filled: {} rows x {} columns", rows, width);

        Ok(Self {
            width,
            rows,
            cells,
            costs: items.iter().map(|item| item.cost).collect(),
        })
    }

    /// Largest capacity in the table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.width - 1
    }

    /// Number of items the table was built from.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.rows - 1
    }

    /// Row for the first `i` items.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }

    /// Best profit over all items at each capacity.
    #[inline]
    pub fn last_row(&self) -> &[f64] {
        self.row(self.rows - 1)
    }

    /// Best profit over all items with total cost `<= capacity`.
    pub fn best(&self, capacity: usize) -> f64 {
        self.last_row()[capacity.min(self.capacity())]
    }

    /// Flat cell storage, row-major.
    pub(crate) fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Walk back from `(items, capacity)` and return the chosen item indices,
    /// ascending.
    pub fn reconstruct(&self, capacity: usize) -> Vec<usize> {
        let mut j = capacity.min(self.capacity());
        let mut chosen = Vec::new();

        for i in (1..self.rows).rev() {
            let cost = self.costs[i - 1];
            if cost == 0 || self.row(i)[j] > self.row(i - 1)[j] {
                chosen.push(i - 1);
                j -= cost as usize;
            }
        }

        chosen.reverse();
        chosen
    }
}
