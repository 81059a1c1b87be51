use thiserror::Error;

/// Errors from evaluating the model at a candidate point.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A model input violated the strict-positivity precondition.
    ///
    /// The production function is undefined for non-positive stocks or
    /// labor inputs, so these are rejected up front rather than letting a
    /// NaN propagate.
    #[error("{name} must be strictly positive, got {value}")]
    NonPositiveInput { name: &'static str, value: f64 },

    /// The candidate point implies a non-positive net interest rate.
    ///
    /// Asset prices divide by the interest rate, so no economically
    /// meaningful equilibrium quantities exist at such a point.
    #[error("implied interest rate is not positive: {rate}")]
    NonPositiveInterestRate { rate: f64 },
}
