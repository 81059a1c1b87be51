use std::convert::Infallible;

use serde::Serialize;
use thiserror::Error;

use regrow_solve::{
    Model,
    optimization::{
        OptimizationProblem,
        nelder_mead::{self, Action, Event},
    },
};

use crate::{
    equilibrium::{Economy, Equilibrium, EquilibriumPoint},
    error::ModelError,
    params::{ParameterError, Parameters},
};

/// Configuration for the steady-state solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Settings for the underlying Nelder–Mead search.
    pub solver: nelder_mead::Config,
    /// The returned result counts as converged only if the sum of squared
    /// residuals at the minimum is at or below this value.
    pub objective_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solver: nelder_mead::Config::default(),
            objective_tol: 1e-10,
        }
    }
}

/// Errors from the steady-state solver entry point.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// The starting point could not be evaluated: non-positive stocks or
    /// an implied non-positive interest rate. The search is only
    /// meaningful from an economically valid seed.
    #[error("seed is not a valid starting point")]
    InvalidSeed(#[source] ModelError),

    #[error(transparent)]
    Solver(#[from] nelder_mead::Error),
}

/// A solved (or best-effort) steady state.
///
/// `converged` is the post-hoc tolerance check: the minimizer offers no
/// convergence guarantee, so a result with `converged == false` must be
/// treated as non-convergent and discarded or reported, never silently
/// accepted as an equilibrium.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SteadyState {
    /// The solved stock pair.
    pub point: EquilibriumPoint,
    /// Equilibrium quantities at the solved point.
    pub equilibrium: Equilibrium,
    /// Sum of squared residuals at the solved point.
    pub objective: f64,
    /// Whether `objective` met the configured tolerance.
    pub converged: bool,
    /// Iterations used by the minimizer.
    pub iters: usize,
}

/// The steady-state search as an optimization problem.
///
/// Solver variables are the logarithms of the two stocks, so any real
/// search point maps to strictly positive stocks; the objective is the sum
/// of squared equilibrium residuals.
struct SteadyStateProblem;

impl OptimizationProblem<2> for SteadyStateProblem {
    type Input = EquilibriumPoint;
    type Output = Equilibrium;
    type InputError = Infallible;
    type ObjectiveError = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::InputError> {
        Ok(EquilibriumPoint {
            capital: x[0].exp(),
            intangible: x[1].exp(),
        })
    }

    fn objective(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<f64, Self::ObjectiveError> {
        let [supply, savings] = output.residuals;
        Ok(supply * supply + savings * savings)
    }
}

/// Solves for the steady state from the given seed with default settings.
///
/// # Errors
///
/// Returns an error for invalid parameters, an invalid seed, or a solver
/// failure. Hitting the iteration limit is not an error: it surfaces as
/// `converged == false` on the result.
pub fn solve_steady_state(
    params: &Parameters,
    seed: EquilibriumPoint,
) -> Result<SteadyState, Error> {
    solve_steady_state_with(params, seed, &Config::default())
}

/// Solves for the steady state with explicit solver settings.
///
/// The seed must evaluate to a valid equilibrium candidate (positive
/// stocks, positive implied interest rate). During the search, candidate
/// points the model rejects are treated as arbitrarily bad rather than
/// aborting, steering the simplex back toward the valid region.
///
/// # Errors
///
/// Returns an error for invalid parameters, an invalid seed, or a solver
/// failure.
pub fn solve_steady_state_with(
    params: &Parameters,
    seed: EquilibriumPoint,
    config: &Config,
) -> Result<SteadyState, Error> {
    let economy = Economy::new(*params)?;
    economy.call(&seed).map_err(Error::InvalidSeed)?;

    let x0 = [seed.capital.ln(), seed.intangible.ln()];
    let observer = |event: &Event<'_, 2>| match event {
        Event::EvalFailed { .. } => Some(Action::AssumeWorse),
        Event::Evaluated { .. } => None,
    };

    let solution = nelder_mead::minimize(
        &economy,
        &SteadyStateProblem,
        x0,
        &config.solver,
        observer,
    )?;

    Ok(SteadyState {
        point: solution.snapshot.input,
        equilibrium: solution.snapshot.output,
        objective: solution.objective,
        converged: solution.objective <= config.objective_tol,
        iters: solution.iters,
    })
}
