//! The full counterfactual exercise: raise the intangible productivity
//! weight and reproduce the documented qualitative trends.

use integration_tests::{baseline, documented_seed, with_intangible_weight};
use regrow_model::{ScenarioRatios, Trend, compare_scenarios, solve_steady_state};

#[test]
fn rising_intangible_weight_reproduces_the_secular_trends() {
    let base = solve_steady_state(&baseline(), documented_seed()).expect("baseline should solve");
    let alt = solve_steady_state(&with_intangible_weight(0.55), documented_seed())
        .expect("counterfactual should solve");

    assert!(base.converged);
    assert!(alt.converged);

    // The documented monotone responses to a higher η.
    assert!(alt.equilibrium.interest_rate < base.equilibrium.interest_rate);

    let base_ratios = ScenarioRatios::from_steady_state(&base);
    let alt_ratios = ScenarioRatios::from_steady_state(&alt);
    assert!(alt_ratios.intangible_share > base_ratios.intangible_share);

    let comparison = compare_scenarios(&base, &alt);
    assert_eq!(comparison.intangible_share, Trend::Increased);
    assert_eq!(comparison.capital_to_output, Trend::Decreased);
    assert_eq!(comparison.mortgage_to_output, Trend::Unchanged);
    assert_eq!(comparison.land_value_to_output, Trend::Increased);
    assert_eq!(comparison.share_price_to_output, Trend::Increased);
    assert_eq!(comparison.wage_ratio, Trend::Increased);
}

#[test]
fn comparison_entries_name_every_ratio() {
    let base = solve_steady_state(&baseline(), documented_seed()).expect("baseline should solve");
    let alt = solve_steady_state(&with_intangible_weight(0.55), documented_seed())
        .expect("counterfactual should solve");

    let entries = compare_scenarios(&base, &alt).entries();

    let names: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        [
            "intangible share",
            "capital / output",
            "mortgage / output",
            "land value / output",
            "share price / output",
            "wage ratio",
        ]
    );
}
