use crate::model::Snapshot;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Nelder–Mead solve.
///
/// The reported point is the best successfully evaluated simplex vertex.
/// Callers deciding whether to accept the result should check both
/// `status` and `objective` against their own tolerance; the solver makes
/// no global-optimality guarantee.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,
    /// Best point found.
    pub x: [f64; N],
    /// Objective value at the best point.
    pub objective: f64,
    /// Model snapshot at the best point.
    pub snapshot: Snapshot<I, O>,
    /// Iteration count when the solver finished.
    pub iters: usize,
}
