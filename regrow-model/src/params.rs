use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The model's named scalar constants.
///
/// One immutable instance per scenario. The default is the documented
/// baseline parameterization; counterfactuals are built with struct-update
/// syntax:
///
/// ```
/// use regrow_model::Parameters;
///
/// let counterfactual = Parameters {
///     intangible_weight: 0.55,
///     ..Parameters::default()
/// };
/// assert!(counterfactual.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Fixed land supply (L̄).
    pub land_supply: f64,
    /// Population share of high-skill households (ϕ).
    pub skilled_share: f64,
    /// Labor endowment per high-skill household (h̃).
    pub skilled_endowment: f64,
    /// Labor endowment per low-skill household (l̃).
    pub unskilled_endowment: f64,
    /// Capital share of output within each sector (α).
    pub capital_share: f64,
    /// Productivity weight on the intangible sector (η).
    pub intangible_weight: f64,
    /// Innovators' bargaining share of intangible rents (ω).
    pub bargaining_share: f64,
    /// Marginal cost of accumulating intangible capital (ψ).
    pub innovation_cost: f64,
    /// Total factor productivity (A).
    pub productivity: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            land_supply: 1.0,
            skilled_share: 0.2,
            skilled_endowment: 40.0,
            unskilled_endowment: 12.5,
            capital_share: 0.33,
            intangible_weight: 0.45,
            bargaining_share: 0.9,
            innovation_cost: 1.0,
            productivity: 1.0,
        }
    }
}

/// Errors from validating a parameter record.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("{name} = {value} is out of range: expected {expected}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl Parameters {
    /// Aggregate low-skill labor supply, (1 − ϕ)·l̃.
    #[must_use]
    pub fn low_skill_labor(&self) -> f64 {
        (1.0 - self.skilled_share) * self.unskilled_endowment
    }

    /// Aggregate high-skill labor supply, ϕ·h̃.
    #[must_use]
    pub fn high_skill_labor(&self) -> f64 {
        self.skilled_share * self.skilled_endowment
    }

    /// Validates that every field is finite and economically meaningful.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first field outside its valid range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_positive("land_supply", self.land_supply)?;
        check_unit_interval("skilled_share", self.skilled_share)?;
        check_positive("skilled_endowment", self.skilled_endowment)?;
        check_positive("unskilled_endowment", self.unskilled_endowment)?;
        check_unit_interval("capital_share", self.capital_share)?;
        check_unit_interval("intangible_weight", self.intangible_weight)?;
        if !self.bargaining_share.is_finite()
            || self.bargaining_share <= 0.0
            || self.bargaining_share > 1.0
        {
            return Err(ParameterError::OutOfRange {
                name: "bargaining_share",
                value: self.bargaining_share,
                expected: "a value in (0, 1]",
            });
        }
        check_positive("innovation_cost", self.innovation_cost)?;
        check_positive("productivity", self.productivity)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ParameterError::OutOfRange {
            name,
            value,
            expected: "a finite, strictly positive value",
        });
    }
    Ok(())
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(ParameterError::OutOfRange {
            name,
            value,
            expected: "a value strictly between 0 and 1",
        });
    }
    Ok(())
}
