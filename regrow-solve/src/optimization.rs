mod evaluate;
mod problem;

pub mod nelder_mead;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use problem::OptimizationProblem;
