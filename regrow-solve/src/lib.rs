//! Generic numerical optimization over pure models.
//!
//! A [`Model`] is a fallible map from an input to an output. An
//! [`OptimizationProblem`](optimization::OptimizationProblem) describes how
//! solver variables become a model input and how a scalar objective is read
//! from the input/output pair. Solvers iterate on the variables, emitting
//! events that an [`Observer`] can use to monitor or steer the search.

pub mod model;
pub mod observe;
pub mod optimization;

pub use model::{Model, Snapshot};
pub use observe::Observer;
