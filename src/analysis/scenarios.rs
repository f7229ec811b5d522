//! Batch comparison over named item sets.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::comparison::{compare_algorithms, SolverComparison};
use crate::core::types::ItemSet;
use crate::core::Result;

/// A named item set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub items: ItemSet,
}

impl Scenario {
    /// Create a scenario from `(cost, profit)` pairs.
    pub fn from_pairs(name: impl Into<String>, pairs: &[(u64, f64)]) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            items: ItemSet::from_pairs(pairs)?,
        })
    }
}

/// Comparison outcome for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub comparison: SolverComparison,
}

/// Compare the knapsack and greedy solvers on every scenario at `budget`.
///
/// Scenarios run in parallel; results keep the input order.
pub fn compare_scenarios(scenarios: &[Scenario], budget: f64) -> Result<Vec<ScenarioResult>> {
    scenarios
        .par_iter()
        .map(|scenario| -> Result<ScenarioResult> {
            Ok(ScenarioResult {
                name: scenario.name.clone(),
                comparison: compare_algorithms(&scenario.items, budget)?,
            })
        })
        .collect()
}

/// Small, large and high-yield reference item sets.
pub fn reference_scenarios() -> Result<Vec<Scenario>> {
    let sets: [(&str, &[(u64, f64)]); 3] = [
        ("small", &[(50, 10.0), (100, 30.0), (150, 40.0)]),
        (
            "large",
            &[
                (50, 5.0),
                (75, 10.0),
                (100, 15.0),
                (120, 20.0),
                (150, 25.0),
                (200, 35.0),
                (250, 45.0),
            ],
        ),
        ("high_yield", &[(100, 50.0), (200, 90.0), (300, 120.0)]),
    ];

    sets.iter()
        .map(|(name, pairs)| Scenario::from_pairs(*name, pairs))
        .collect()
}
