//! Shared fixtures for the integration tests.

use regrow_model::{EquilibriumPoint, Parameters};

/// The documented baseline parameterization.
#[must_use]
pub fn baseline() -> Parameters {
    Parameters::default()
}

/// Baseline with a different intangible productivity weight (η).
#[must_use]
pub fn with_intangible_weight(weight: f64) -> Parameters {
    Parameters {
        intangible_weight: weight,
        ..Parameters::default()
    }
}

/// The documented starting point, (K, H) = (0.4, 1.0).
#[must_use]
pub fn documented_seed() -> EquilibriumPoint {
    EquilibriumPoint {
        capital: 0.4,
        intangible: 1.0,
    }
}
