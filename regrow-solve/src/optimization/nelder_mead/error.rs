use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur during a Nelder–Mead solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("seed contains non-finite value: {value}")]
    NonFiniteSeed { value: f64 },

    #[error("non-finite objective {objective} at x = {x:?}")]
    NonFiniteObjective { x: Vec<f64>, objective: f64 },

    #[error("no candidate point was evaluated successfully")]
    NoViablePoint,

    #[error("failed to compute input")]
    Input(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("failed to compute objective")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl<IE, ME, OE> From<EvalError<IE, ME, OE>> for Error
where
    IE: StdError + Send + Sync + 'static,
    ME: StdError + Send + Sync + 'static,
    OE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<IE, ME, OE>) -> Self {
        match err {
            EvalError::Input(e) => Self::Input(Box::new(e)),
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Objective(e) => Self::Objective(Box::new(e)),
        }
    }
}
