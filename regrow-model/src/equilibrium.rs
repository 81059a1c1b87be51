use serde::{Deserialize, Serialize};

use regrow_solve::Model;

use crate::{error::ModelError, params::Parameters, prices::factor_prices};

/// Depreciation rate on physical capital (δ).
///
/// The net interest rate is the marginal product of capital less δ, so
/// candidate points with too much capital imply a non-positive rate and
/// are rejected as economically meaningless.
pub const DEPRECIATION: f64 = 0.05;

/// Fraction of labor income saved each period (β).
///
/// A two-period saver with log utility and no discounting saves half of
/// their wage income.
pub const SAVING_RATE: f64 = 0.5;

/// Share of output spent on housing services (ν).
///
/// Land pays a rental flow of ν·Y, which no-arbitrage capitalizes into
/// the land price at the net interest rate.
pub const HOUSING_SHARE: f64 = 0.1;

/// A candidate or solved steady state: the two stock variables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumPoint {
    pub capital: f64,
    pub intangible: f64,
}

/// Everything the steady-state relations determine at a candidate point.
///
/// All quantities are derived from the point and the parameters; none has
/// an independent lifecycle. At a true steady state both entries of
/// `residuals` vanish.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Equilibrium {
    pub output: f64,
    /// Net interest rate, `∂Y/∂K − δ`. Strictly positive by construction;
    /// points implying otherwise fail to evaluate.
    pub interest_rate: f64,
    /// Rental rate on intangible capital, `∂Y/∂H`.
    pub intangible_rental: f64,
    pub wage_low: f64,
    pub wage_high: f64,
    /// Value of firm equity: the non-innovator share of intangible rents,
    /// capitalized as a perpetuity.
    pub share_price: f64,
    /// Price of one unit of land.
    pub land_price: f64,
    /// Aggregate land value, `land_price · land_supply`.
    pub land_value: f64,
    /// Mortgage borrowing against land, clamped at zero when savings
    /// cover the purchase.
    pub mortgage: f64,
    /// `[intangible-capital supply, savings balance]` — both zero at a
    /// true steady state.
    pub residuals: [f64; 2],
}

/// The economy for one scenario: a validated parameter record, exposed as
/// a [`Model`] from candidate points to equilibrium quantities.
#[derive(Debug, Clone)]
pub struct Economy {
    params: Parameters,
}

impl Economy {
    /// Creates an economy after validating the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is outside its valid range.
    pub fn new(params: Parameters) -> Result<Self, crate::params::ParameterError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }
}

impl Model for Economy {
    type Input = EquilibriumPoint;
    type Output = Equilibrium;
    type Error = ModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate_point(&self.params, input)
    }
}

/// Evaluates the closed-form steady-state relations at a candidate point.
fn evaluate_point(
    params: &Parameters,
    point: &EquilibriumPoint,
) -> Result<Equilibrium, ModelError> {
    let EquilibriumPoint { capital, intangible } = *point;

    let fp = factor_prices(capital, intangible, params)?;

    let interest_rate = fp.interest_rate - DEPRECIATION;
    if interest_rate <= 0.0 {
        return Err(ModelError::NonPositiveInterestRate {
            rate: interest_rate,
        });
    }

    // No-arbitrage prices both dividend and land-rent flows at the net rate.
    let share_price =
        (1.0 - params.bargaining_share) * fp.intangible_rental * intangible / interest_rate;
    let land_value = HOUSING_SHARE * fp.output / interest_rate;
    let land_price = land_value / params.land_supply;

    let worker_savings = SAVING_RATE * fp.wage_low * params.low_skill_labor();
    let mortgage = (land_value - worker_savings).max(0.0);

    // Free entry into innovation: the bargained share of intangible rents
    // must cover the accumulation cost at the going rate.
    let supply_residual =
        params.bargaining_share * fp.intangible_rental - params.innovation_cost * interest_rate;

    // Asset market clearing: aggregate savings fund capital, land, and
    // equity holdings.
    let savings_residual = SAVING_RATE * (1.0 - params.capital_share) * fp.output
        - (capital + land_value + share_price);

    Ok(Equilibrium {
        output: fp.output,
        interest_rate,
        intangible_rental: fp.intangible_rental,
        wage_low: fp.wage_low,
        wage_high: fp.wage_high,
        share_price,
        land_price,
        land_value,
        mortgage,
        residuals: [supply_residual, savings_residual],
    })
}

/// The two steady-state residuals at a candidate point.
///
/// # Errors
///
/// Returns an error for non-positive stocks or a point implying a
/// non-positive net interest rate.
pub fn equilibrium_residuals(
    capital: f64,
    intangible: f64,
    params: &Parameters,
) -> Result<[f64; 2], ModelError> {
    let point = EquilibriumPoint { capital, intangible };
    Ok(evaluate_point(params, &point)?.residuals)
}
