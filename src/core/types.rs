//! Core data types for capalloc.

use serde::{Deserialize, Serialize};

use super::error::{AllocError, Result};

/// Type alias for integer item costs and DP capacities.
pub type Cost = u64;

/// Type alias for profit values.
pub type Profit = f64;

/// Upper bound on the number of cells a single DP table may hold.
///
/// At eight bytes per cell this caps a table at 1 GiB.
pub const MAX_TABLE_CELLS: u128 = 1 << 27;

/// Absolute tolerance used when comparing profits and allocations.
pub const PROFIT_EPSILON: f64 = 1e-9;

/// A single investable opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Capital required to take the position.
    pub cost: Cost,
    /// Profit realised over the whole holding horizon.
    pub profit: Profit,
}

impl Item {
    /// Create a new item.
    pub fn new(cost: Cost, profit: Profit) -> Self {
        Self { cost, profit }
    }

    /// Profit per unit of cost. Zero-cost items rank above everything else.
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.cost == 0 {
            f64::INFINITY
        } else {
            self.profit / self.cost as f64
        }
    }
}

impl From<(Cost, Profit)> for Item {
    fn from((cost, profit): (Cost, Profit)) -> Self {
        Self::new(cost, profit)
    }
}

/// Validated, index-stable collection of items.
///
/// Indices reported in solutions refer to positions in this set, which
/// always match the order the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Create an item set, rejecting non-finite or negative profits.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        for (index, item) in items.iter().enumerate() {
            if !item.profit.is_finite() {
                return Err(AllocError::invalid_item(index, "profit must be finite"));
            }
            if item.profit < 0.0 {
                return Err(AllocError::invalid_item(index, "profit must be >= 0"));
            }
        }
        Ok(Self { items })
    }

    /// Build from `(cost, profit)` pairs.
    pub fn from_pairs(pairs: &[(Cost, Profit)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(Item::from).collect())
    }

    /// Build from parallel signed cost and profit slices.
    ///
    /// Used where costs cross a boundary as signed integers; negative costs
    /// are rejected here rather than wrapped.
    pub fn from_columns(costs: &[i64], profits: &[f64]) -> Result<Self> {
        if costs.len() != profits.len() {
            return Err(AllocError::invalid_parameter(format!(
                "costs and profits differ in length: {} vs {}",
                costs.len(),
                profits.len()
            )));
        }
        let mut items = Vec::with_capacity(costs.len());
        for (index, (&cost, &profit)) in costs.iter().zip(profits).enumerate() {
            if cost < 0 {
                return Err(AllocError::invalid_item(index, "cost must be >= 0"));
            }
            items.push(Item::new(cost as Cost, profit));
        }
        Self::new(items)
    }

    /// Get the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a single item at index.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Borrow the items as a slice.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Sum of costs for the given indices.
    pub fn cost_of(&self, indices: &[usize]) -> Cost {
        indices.iter().map(|&i| self.items[i].cost).sum()
    }

    /// Sum of profits for the given indices.
    pub fn profit_of(&self, indices: &[usize]) -> Profit {
        indices.iter().map(|&i| self.items[i].profit).sum()
    }
}

impl TryFrom<Vec<Item>> for ItemSet {
    type Error = AllocError;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        Self::new(items)
    }
}

impl From<ItemSet> for Vec<Item> {
    fn from(set: ItemSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Cap on the budget share that may flow into the stock knapsack.
///
/// The canonical form is an absolute currency amount; a fraction is
/// converted by multiplying with the total budget. Both forms are clamped
/// to `[0, total_budget]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RiskLimit {
    /// Absolute currency cap.
    Absolute(f64),
    /// Fraction of the total budget (0.5 = 50%).
    Fraction(f64),
}

impl Default for RiskLimit {
    fn default() -> Self {
        RiskLimit::Fraction(1.0)
    }
}

impl RiskLimit {
    /// Create an absolute cap.
    pub fn absolute(amount: f64) -> Self {
        RiskLimit::Absolute(amount)
    }

    /// Create a fractional cap.
    pub fn fraction(share: f64) -> Self {
        RiskLimit::Fraction(share)
    }

    /// Resolve to an absolute cap within `[0, total_budget]`.
    pub fn cap(&self, total_budget: f64) -> Result<f64> {
        let raw = match *self {
            RiskLimit::Absolute(amount) => amount,
            RiskLimit::Fraction(share) => {
                if !share.is_finite() || share < 0.0 {
                    return Err(AllocError::invalid_parameter(format!(
                        "risk fraction must be finite and >= 0, got {share}"
                    )));
                }
                total_budget * share
            }
        };
        if raw.is_nan() || raw < 0.0 {
            return Err(AllocError::invalid_parameter(format!(
                "risk cap must be >= 0, got {raw}"
            )));
        }
        Ok(raw.min(total_budget).max(0.0))
    }
}

impl From<f64> for RiskLimit {
    fn from(amount: f64) -> Self {
        RiskLimit::Absolute(amount)
    }
}

/// Per-period bond yield stored as a fraction (0.05 = 5%).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondYield(f64);

impl BondYield {
    /// Create from a fraction.
    pub fn from_fraction(rate: f64) -> Self {
        Self(rate)
    }

    /// Create from a percentage (5.0 = 5%).
    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// Rate as a fraction.
    #[inline]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Rate as a percentage.
    #[inline]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Reject non-finite rates.
    pub fn validate(self) -> Result<Self> {
        if !self.0.is_finite() {
            return Err(AllocError::invalid_parameter(format!(
                "bond yield must be finite, got {}",
                self.0
            )));
        }
        Ok(self)
    }
}

impl From<f64> for BondYield {
    fn from(rate: f64) -> Self {
        Self::from_fraction(rate)
    }
}

/// Result of a single-budget selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution1D {
    /// Total profit of the chosen items.
    pub max_profit: Profit,
    /// Indices of the chosen items, ascending.
    pub chosen: Vec<usize>,
    /// Total cost of the chosen items.
    pub total_cost: Cost,
}

impl Solution1D {
    /// The empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of chosen items.
    #[inline]
    pub fn num_chosen(&self) -> usize {
        self.chosen.len()
    }
}

/// Result of a stock/bond budget split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution2D {
    /// Stock profit plus bond profit.
    pub total_profit: Profit,
    /// Capital assigned to the stock knapsack.
    pub stock_allocation: f64,
    /// Capital left in bonds.
    pub bond_allocation: f64,
    /// Profit from the stock knapsack.
    pub stock_profit: Profit,
    /// Profit from bonds.
    pub bond_profit: Profit,
    /// Budget that was split.
    pub total_budget: f64,
}

impl Solution2D {
    /// Share of the budget in stocks (0 for a zero budget).
    pub fn stock_fraction(&self) -> f64 {
        share(self.stock_allocation, self.total_budget)
    }

    /// Share of the budget in bonds (0 for a zero budget).
    pub fn bond_fraction(&self) -> f64 {
        share(self.bond_allocation, self.total_budget)
    }
}

/// Result of a multi-period stock/bond split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution3D {
    /// Stock plus bond profit accumulated over all periods.
    pub total_profit: Profit,
    /// Capital held in stocks for the whole horizon.
    pub stock_allocation: f64,
    /// Capital held in bonds for the whole horizon.
    pub bond_allocation: f64,
    /// Amortized stock profit accumulated over all periods.
    pub stock_profit: Profit,
    /// Bond profit accumulated over all periods.
    pub bond_profit: Profit,
    /// Budget that was split.
    pub total_budget: f64,
    /// Number of periods in the horizon.
    pub periods: usize,
    /// Indices of the held stock items, ascending.
    pub chosen: Vec<usize>,
}

impl Solution3D {
    /// Share of the budget in stocks (0 for a zero budget).
    pub fn stock_fraction(&self) -> f64 {
        share(self.stock_allocation, self.total_budget)
    }

    /// Share of the budget in bonds (0 for a zero budget).
    pub fn bond_fraction(&self) -> f64 {
        share(self.bond_allocation, self.total_budget)
    }

    /// Average profit per period.
    pub fn profit_per_period(&self) -> Profit {
        if self.periods == 0 {
            return 0.0;
        }
        self.total_profit / self.periods as f64
    }
}

#[inline]
fn share(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        0.0
    } else {
        part / whole
    }
}

/// Truncate a real budget to an integer DP capacity.
///
/// Non-finite budgets are rejected. Zero and negative budgets map to a zero
/// capacity.
pub fn budget_capacity(budget: f64) -> Result<usize> {
    if !budget.is_finite() {
        return Err(AllocError::invalid_parameter(format!(
            "budget must be finite, got {budget}"
        )));
    }
    if budget <= 0.0 {
        return Ok(0);
    }
    Ok(budget.floor() as usize)
}

/// Number of capacity columns, `capacity + 1`, for a DP table.
///
/// A capacity of `usize::MAX` (a saturated budget) has no column count and is
/// reported as too large.
pub fn table_width(capacity: usize) -> Result<usize> {
    capacity
        .checked_add(1)
        .ok_or_else(|| AllocError::table_too_large(capacity as u128 + 1, MAX_TABLE_CELLS))
}

/// Check that a table with the given dimensions fits under [`MAX_TABLE_CELLS`].
pub fn check_table_size(dims: &[usize]) -> Result<()> {
    let cells = dims
        .iter()
        .fold(1u128, |acc, &d| acc.saturating_mul(d as u128));
    if cells > MAX_TABLE_CELLS {
        return Err(AllocError::table_too_large(cells, MAX_TABLE_CELLS));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ratio() {
        assert!((Item::new(200, 30.0).ratio() - 0.15).abs() < 1e-12);
        assert_eq!(Item::new(0, 5.0).ratio(), f64::INFINITY);
        assert_eq!(Item::new(0, 0.0).ratio(), f64::INFINITY);
    }

    #[test]
    fn test_item_set_validation() {
        assert!(ItemSet::from_pairs(&[(100, 10.0), (0, 0.0)]).is_ok());

        let err = ItemSet::from_pairs(&[(100, 10.0), (50, -1.0)]).unwrap_err();
        assert_eq!(err, AllocError::invalid_item(1, "profit must be >= 0"));

        assert!(ItemSet::from_pairs(&[(100, f64::NAN)]).is_err());
    }

    #[test]
    fn test_from_columns() {
        let set = ItemSet::from_columns(&[100, 200], &[10.0, 30.0]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1), Some(&Item::new(200, 30.0)));

        assert!(matches!(
            ItemSet::from_columns(&[100, -5], &[10.0, 30.0]),
            Err(AllocError::InvalidItem { index: 1, .. })
        ));
        assert!(matches!(
            ItemSet::from_columns(&[100], &[10.0, 30.0]),
            Err(AllocError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_risk_limit_cap() {
        assert!((RiskLimit::fraction(0.5).cap(300.0).unwrap() - 150.0).abs() < 1e-12);
        assert!((RiskLimit::absolute(120.0).cap(300.0).unwrap() - 120.0).abs() < 1e-12);
        // Both forms clamp to the budget
        assert!((RiskLimit::absolute(500.0).cap(300.0).unwrap() - 300.0).abs() < 1e-12);
        assert!((RiskLimit::fraction(1.5).cap(300.0).unwrap() - 300.0).abs() < 1e-12);

        assert!(RiskLimit::absolute(-1.0).cap(300.0).is_err());
        assert!(RiskLimit::fraction(-0.1).cap(300.0).is_err());
        assert!(RiskLimit::fraction(f64::NAN).cap(300.0).is_err());
    }

    #[test]
    fn test_bond_yield_units() {
        let y = BondYield::from_percent(5.0);
        assert!((y.fraction() - 0.05).abs() < 1e-12);
        assert!((BondYield::from(0.05).percent() - 5.0).abs() < 1e-12);
        assert!(BondYield::from(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_budget_capacity() {
        assert_eq!(budget_capacity(300.0).unwrap(), 300);
        assert_eq!(budget_capacity(300.9).unwrap(), 300);
        assert_eq!(budget_capacity(0.0).unwrap(), 0);
        assert_eq!(budget_capacity(-10.0).unwrap(), 0);
        assert!(budget_capacity(f64::NAN).is_err());
    }

    #[test]
    fn test_table_width_saturated_budget() {
        assert_eq!(table_width(300).unwrap(), 301);
        let capacity = budget_capacity(1e20).unwrap();
        assert_eq!(capacity, usize::MAX);
        assert!(matches!(
            table_width(capacity),
            Err(AllocError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn test_check_table_size() {
        assert!(check_table_size(&[10, 301]).is_ok());
        assert!(matches!(
            check_table_size(&[1 << 20, 1 << 20]),
            Err(AllocError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn test_fractions_zero_budget() {
        let solution = Solution2D::default();
        assert_eq!(solution.stock_fraction(), 0.0);
        assert_eq!(solution.bond_fraction(), 0.0);
    }
}
