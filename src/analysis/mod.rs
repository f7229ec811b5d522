//! Comparison and sweep utilities built on the solvers.

pub mod comparison;
pub mod curve;
pub mod report;
pub mod scenarios;

pub use comparison::{compare_algorithms, compare_solvers, SolverComparison};
pub use curve::{peak_profit, profit_curve, CurvePoint};
pub use report::PortfolioReport;
pub use scenarios::{compare_scenarios, reference_scenarios, Scenario, ScenarioResult};
