//! The Redistributive Growth model.
//!
//! A two-sector macroeconomic model: output is produced from physical
//! capital paired with low-skill labor and intangible capital paired with
//! high-skill labor, combined in a constant-returns nested Cobb–Douglas
//! form. A steady state is a pair of stocks at which the intangible-capital
//! supply condition and the savings balance both hold.
//!
//! The crate exposes the model as pure functions plus an [`Economy`] model
//! for the `regrow-solve` optimization machinery:
//!
//! - [`production`] — the production function
//! - [`factor_prices`] — marginal factor prices by forward-mode AD
//! - [`equilibrium::equilibrium_residuals`] — the two steady-state residuals
//! - [`solve_steady_state`] — the Nelder–Mead steady-state solver over
//!   log-transformed stocks
//! - [`compare_scenarios`] — qualitative comparison of two solved scenarios

mod error;

pub mod dual;
pub mod equilibrium;
pub mod params;
pub mod prices;
pub mod production;
pub mod scenario;
pub mod steady_state;

pub use equilibrium::{Economy, Equilibrium, EquilibriumPoint};
pub use error::ModelError;
pub use params::{ParameterError, Parameters};
pub use prices::{FactorPrices, factor_prices};
pub use production::production;
pub use scenario::{ScenarioComparison, ScenarioRatios, Trend, compare_scenarios};
pub use steady_state::{SteadyState, solve_steady_state, solve_steady_state_with};
