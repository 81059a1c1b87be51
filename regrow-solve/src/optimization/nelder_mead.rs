//! Nelder–Mead simplex search for multivariate optimization.
//!
//! # Algorithm
//!
//! The solver maintains a simplex of `N + 1` points in the variable space.
//! Each iteration reflects the worst vertex through the centroid of the
//! others, optionally expanding or contracting the step, and shrinks the
//! whole simplex toward the best vertex when no candidate improves. It
//! converges when the simplex diameter or the objective spread falls below
//! the configured tolerances.
//!
//! # When to Use
//!
//! Nelder–Mead is appropriate when:
//! - The objective is smooth or at least continuous near the optimum
//! - Derivative information is unavailable or not worth deriving
//! - The number of variables is small (a handful at most)
//!
//! # Limitations
//!
//! - **Local search**: converges to a local minimum; a poor seed can land
//!   on a spurious stationary point
//! - **No constraints**: feasibility must be handled by the problem's
//!   variable mapping (for example, searching over logarithms) or by an
//!   observer returning [`Action::AssumeWorse`] for infeasible points
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per model evaluation, including the
//! initial simplex. Observers can return [`Action::StopEarly`] to halt with
//! the best point found, or [`Action::AssumeWorse`] to rank a point behind
//! every vertex — the recovery path for evaluation failures.

mod config;
mod error;
mod event;
mod search;
mod simplex;
mod solution;

pub use config::Config;
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};

use crate::{model::Model, observe::Observer, optimization::OptimizationProblem};

use search::search;

/// Finds a minimum of the objective using Nelder–Mead simplex search.
///
/// The observer receives an [`Event`] for every evaluation. See the
/// [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the config or seed is invalid, or if the model or
/// problem fails during evaluation and the observer does not return
/// [`Action::AssumeWorse`] to recover.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    seed: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(model, problem, seed, config, observer, |v| v)
}

/// Finds a minimum of the objective without observer support.
///
/// # Errors
///
/// Returns an error if the config or seed is invalid, or if the model or
/// problem fails during evaluation.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    seed: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, seed, config, ())
}

/// Finds a maximum of the objective using Nelder–Mead simplex search.
///
/// # Errors
///
/// Returns an error if the config or seed is invalid, or if the model or
/// problem fails during evaluation and the observer does not return
/// [`Action::AssumeWorse`] to recover.
pub fn maximize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    seed: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(model, problem, seed, config, observer, |v| -v)
}

/// Finds a maximum of the objective without observer support.
///
/// # Errors
///
/// Returns an error if the config or seed is invalid, or if the model or
/// problem fails during evaluation.
pub fn maximize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    seed: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, seed, config, ())
}
