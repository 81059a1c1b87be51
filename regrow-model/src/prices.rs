use serde::Serialize;

use crate::{
    dual::Dual,
    error::ModelError,
    params::Parameters,
    production::{output, require_positive},
};

/// Marginal factor prices at a candidate point, from the production
/// function's gradient.
///
/// `interest_rate` here is the gross rental rate on physical capital (its
/// marginal product); the equilibrium module nets out depreciation. The
/// `accounting_residual` is output minus the sum of factor payments, which
/// Euler's theorem pins at zero for the constant-returns form — it is a
/// correctness self-check, not an independent quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorPrices {
    pub interest_rate: f64,
    pub intangible_rental: f64,
    pub wage_low: f64,
    pub wage_high: f64,
    pub output: f64,
    pub accounting_residual: f64,
}

/// Computes the four marginal factor prices at `(capital, intangible)`.
///
/// Labor inputs come from the parameter record's population shares. The
/// gradient is obtained by seeding all four inputs as dual-number variables
/// and evaluating the production function once.
///
/// # Errors
///
/// Returns [`ModelError::NonPositiveInput`] if either stock is zero,
/// negative, or non-finite.
pub fn factor_prices(
    capital: f64,
    intangible: f64,
    params: &Parameters,
) -> Result<FactorPrices, ModelError> {
    require_positive("capital", capital)?;
    require_positive("intangible capital", intangible)?;

    let low = params.low_skill_labor();
    let high = params.high_skill_labor();

    let y = output(
        Dual::<4>::variable(capital, 0),
        Dual::<4>::variable(intangible, 1),
        Dual::<4>::variable(low, 2),
        Dual::<4>::variable(high, 3),
        params,
    );
    let [interest_rate, intangible_rental, wage_low, wage_high] = y.deriv;

    let payments =
        interest_rate * capital + intangible_rental * intangible + wage_low * low + wage_high * high;

    Ok(FactorPrices {
        interest_rate,
        intangible_rental,
        wage_low,
        wage_high,
        output: y.value,
        accounting_residual: y.value - payments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn gradient_matches_analytic_marginal_products() {
        let params = Parameters::default();
        let (capital, intangible) = (0.7, 1.3);
        let (low, high) = (params.low_skill_labor(), params.high_skill_labor());

        let fp = factor_prices(capital, intangible, &params).expect("valid point");

        let alpha = params.capital_share;
        let eta = params.intangible_weight;
        let tangible = capital.powf(alpha) * low.powf(1.0 - alpha);
        let knowledge = intangible.powf(alpha) * high.powf(1.0 - alpha);

        assert_relative_eq!(
            fp.interest_rate,
            alpha * (1.0 - eta) * tangible / capital,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            fp.intangible_rental,
            alpha * eta * knowledge / intangible,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            fp.wage_low,
            (1.0 - alpha) * (1.0 - eta) * tangible / low,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            fp.wage_high,
            (1.0 - alpha) * eta * knowledge / high,
            max_relative = 1e-12
        );
    }

    #[test]
    fn factor_payments_exhaust_output() {
        let params = Parameters::default();

        // Euler's theorem holds everywhere for the constant-returns form.
        for (capital, intangible) in [(0.4, 1.0), (0.7, 1.3), (5.0, 0.1), (12.0, 9.0)] {
            let fp = factor_prices(capital, intangible, &params).expect("valid point");
            assert_abs_diff_eq!(fp.accounting_residual, 0.0, epsilon = 1e-12 * fp.output);
        }
    }

    #[test]
    fn rejects_non_positive_stocks() {
        let params = Parameters::default();

        assert!(matches!(
            factor_prices(0.0, 1.0, &params),
            Err(ModelError::NonPositiveInput { name: "capital", .. })
        ));
        assert!(matches!(
            factor_prices(1.0, -2.0, &params),
            Err(ModelError::NonPositiveInput { .. })
        ));
    }
}
