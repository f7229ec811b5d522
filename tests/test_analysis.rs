//! Integration tests for comparison, curves, scenarios and reports.

use capalloc::analysis::{
    compare_algorithms, compare_scenarios, peak_profit, profit_curve, reference_scenarios,
    PortfolioReport, Scenario,
};
use capalloc::core::types::{BondYield, ItemSet, RiskLimit};
use capalloc::core::AllocationConfig;
use capalloc::solvers::KnapsackSolver;

fn demo_items() -> ItemSet {
    ItemSet::from_pairs(&[(100, 10.0), (200, 30.0), (150, 20.0), (80, 15.0), (120, 25.0)]).unwrap()
}

#[test]
fn test_comparison_on_demo_items() {
    let cmp = compare_algorithms(&demo_items(), 300.0).unwrap();

    // Greedy: 120 (0.208), 80 (0.1875) then 100 fits exactly -> 50, same as optimal
    assert!((cmp.optimal.max_profit - 50.0).abs() < 1e-10);
    assert!((cmp.baseline.max_profit - 50.0).abs() < 1e-10);
    assert!(cmp.gap.abs() < 1e-10);
    assert!(cmp.gap_pct.unwrap().abs() < 1e-10);
}

#[test]
fn test_curve_matches_individual_solves() {
    let items = demo_items();
    let points = profit_curve(&items, 450.0, 10).unwrap();

    for point in &points {
        let direct = KnapsackSolver.solve(&items, point.budget).unwrap();
        assert!((point.profit - direct.max_profit).abs() < 1e-12);
        assert_eq!(point.items_chosen, direct.num_chosen());
    }
    // Everything costs 650 in total; 450 buys 100 + 80 + 120 + 150 = 450 -> 70
    assert!((peak_profit(&points) - 70.0).abs() < 1e-10);
}

#[test]
fn test_custom_scenarios_keep_order() {
    let scenarios = vec![
        Scenario::from_pairs("b", &[(10, 1.0)]).unwrap(),
        Scenario::from_pairs("a", &[(100, 10.0), (200, 30.0), (150, 20.0)]).unwrap(),
        Scenario::from_pairs("empty", &[]).unwrap(),
    ];
    let results = compare_scenarios(&scenarios, 300.0).unwrap();

    assert_eq!(results[0].name, "b");
    assert_eq!(results[1].name, "a");
    assert!((results[1].comparison.gap - 10.0).abs() < 1e-10);
    assert_eq!(results[2].comparison.gap_pct, None);
}

#[test]
fn test_reference_scenarios_dominance() {
    let results = compare_scenarios(&reference_scenarios().unwrap(), 300.0).unwrap();
    assert_eq!(results.len(), 3);
    for result in results {
        assert!(
            result.comparison.optimal.max_profit + 1e-9 >= result.comparison.baseline.max_profit,
            "{}",
            result.name
        );
    }
}

#[test]
fn test_report_from_config() {
    let config = AllocationConfig::new(300.0)
        .with_bond_yield(BondYield::from_percent(2.0))
        .with_risk_limit(RiskLimit::absolute(200.0))
        .with_periods(2)
        .with_curve_steps(5);
    let report = PortfolioReport::build(&demo_items(), &config).unwrap();

    assert_eq!(report.knapsack, report.comparison.optimal);
    assert_eq!(report.greedy, report.comparison.baseline);
    assert!(report.risk_split.stock_allocation <= 200.0);
    assert!(report.horizon_split.stock_allocation <= 200.0);
    assert_eq!(report.horizon_split.periods, 2);
    assert_eq!(report.profit_curve.len(), 5);
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "total_budget": 500.0,
        "bond_yield": 0.04,
        "risk_limit": { "kind": "absolute", "value": 250.0 },
        "periods": 4
    }"#;
    let config: AllocationConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.total_budget, 500.0);
    assert!((config.bond_yield.fraction() - 0.04).abs() < 1e-12);
    assert_eq!(config.risk_limit, RiskLimit::Absolute(250.0));
    assert_eq!(config.periods, 4);
    // Missing fields fall back to defaults
    assert_eq!(config.curve_steps, 20);
    assert!(config.validate().is_ok());
}

#[test]
fn test_item_set_rejects_negative_profit_in_json() {
    let json = r#"[{ "cost": 10, "profit": -1.0 }]"#;
    assert!(serde_json::from_str::<ItemSet>(json).is_err());

    let json = r#"[{ "cost": 10, "profit": 1.0 }]"#;
    let items: ItemSet = serde_json::from_str(json).unwrap();
    assert_eq!(items.len(), 1);
}
