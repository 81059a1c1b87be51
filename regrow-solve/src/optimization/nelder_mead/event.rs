/// Control actions supported by the Nelder–Mead solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the best point found so far.
    StopEarly,
    /// Treat the observed point as worse than every simplex vertex.
    ///
    /// Returning this from an [`Event::EvalFailed`] lets the search recover
    /// from candidate points the model cannot evaluate, steering the
    /// simplex back into the feasible region.
    AssumeWorse,
}

/// Per-evaluation event emitted by the Nelder–Mead solver.
///
/// `iter` is the iteration counter: 0 for the initial simplex, then 1-based
/// within the main loop. A single iteration may emit several events
/// (reflection, expansion, contraction, or a full shrink).
#[derive(Debug)]
pub enum Event<'a, const N: usize> {
    /// The model and problem evaluated successfully at `x`.
    Evaluated {
        iter: usize,
        x: [f64; N],
        objective: f64,
    },
    /// Evaluation at `x` failed.
    EvalFailed {
        iter: usize,
        x: [f64; N],
        error: &'a (dyn std::error::Error + 'static),
    },
}
