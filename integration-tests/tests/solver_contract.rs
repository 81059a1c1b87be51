//! End-to-end checks of the steady-state solver contract from the public
//! API: convergence at the documented scenario, determinism, and seed
//! validation.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use integration_tests::{baseline, documented_seed};
use regrow_model::{
    EquilibriumPoint, ModelError, equilibrium::equilibrium_residuals, factor_prices,
    solve_steady_state, steady_state::Error,
};

#[test]
fn documented_scenario_converges_with_positive_interest_rate() {
    let params = baseline();

    let solved = solve_steady_state(&params, documented_seed()).expect("should solve");

    assert!(solved.converged);
    assert!(solved.objective < 1e-10);
    assert!(solved.equilibrium.interest_rate > 0.0);

    let residuals = equilibrium_residuals(solved.point.capital, solved.point.intangible, &params)
        .expect("solved point is valid");
    assert_abs_diff_eq!(residuals[0], 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(residuals[1], 0.0, epsilon = 1e-8);
}

#[test]
fn factor_payments_exhaust_output_at_the_solution() {
    let params = baseline();

    let solved = solve_steady_state(&params, documented_seed()).expect("should solve");
    let fp = factor_prices(solved.point.capital, solved.point.intangible, &params)
        .expect("solved point is valid");

    assert_abs_diff_eq!(fp.accounting_residual, 0.0, epsilon = 1e-12 * fp.output);
}

#[test]
#[allow(clippy::float_cmp)]
fn repeated_solves_are_numerically_indistinguishable() {
    let params = baseline();

    let first = solve_steady_state(&params, documented_seed()).expect("should solve");
    let second = solve_steady_state(&params, documented_seed()).expect("should solve");

    assert_eq!(first.point.capital, second.point.capital);
    assert_eq!(first.point.intangible, second.point.intangible);
    assert_eq!(first.objective, second.objective);
}

#[test]
fn seeds_agree_on_the_equilibrium() {
    let params = baseline();
    let other_seed = EquilibriumPoint {
        capital: 2.0,
        intangible: 0.2,
    };

    let from_documented = solve_steady_state(&params, documented_seed()).expect("should solve");
    let from_other = solve_steady_state(&params, other_seed).expect("should solve");

    assert_relative_eq!(
        from_documented.point.capital,
        from_other.point.capital,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        from_documented.point.intangible,
        from_other.point.intangible,
        epsilon = 1e-6
    );
}

#[test]
fn seed_implying_negative_interest_rate_is_flagged() {
    let seed = EquilibriumPoint {
        capital: 100.0,
        intangible: 1.0,
    };

    let result = solve_steady_state(&baseline(), seed);

    assert!(matches!(
        result,
        Err(Error::InvalidSeed(ModelError::NonPositiveInterestRate { .. }))
    ));
}
