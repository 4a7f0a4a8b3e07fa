use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::Shape;

/// Errors that can occur during Newton solving.
///
/// Running out of iterations is not an error; see [`super::Status::MaxIters`].
/// Invalid settings are rejected earlier, by [`super::Config::new`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("input must be 1-D with at least one element")]
    EmptyInput,

    #[error("function output must be 1-D with at least one element")]
    EmptyOutput,

    #[error("singular matrix in {shape} step at iteration {iter}")]
    SingularMatrix { iter: usize, shape: Shape },

    /// A residual at `x` was NaN or infinite. `iter` is 0 for the initial
    /// guess. No partial solution is returned.
    #[error("non-finite residual at iteration {iter}: x = {x:?}")]
    NonFiniteResidual { iter: usize, x: Vec<f64> },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
