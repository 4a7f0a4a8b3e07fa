use thiserror::Error;

use yieldpoint_core::{EquationProblem, Model, Snapshot};

/// One point at which a solver has evaluated the residuals.
///
/// `N` is the number of variables and `R` the number of residuals.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize, const R: usize = N> {
    pub x: [f64; N],
    pub residuals: [f64; R],
    pub snapshot: Snapshot<I, O>,
}

impl<I, O, const N: usize, const R: usize> Evaluation<I, O, N, R> {
    /// Returns true if every residual is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.residuals.iter().all(|r| r.is_finite())
    }
}

/// Failure while mapping `x` to residuals.
///
/// The two sources are kept apart so callers can tell a failing model from a
/// problem that could not build an input or residuals.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("model call failed")]
    Model(#[source] ME),

    #[error("problem error")]
    Problem(#[source] PE),
}

/// Return type of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize, const R: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N, R>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N, R>>::Error>,
>;

/// Computes the residuals of `problem` at `x`.
///
/// `x` becomes a model input through [`EquationProblem::input`], the model is
/// called once, and the residuals are read back with
/// [`EquationProblem::residuals`]. The input and output are kept in the
/// returned snapshot.
///
/// # Errors
///
/// Returns [`EvalError::Problem`] if the input or residuals cannot be built,
/// or [`EvalError::Model`] if the model call fails.
pub fn evaluate<M, P, const N: usize, const R: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N, R>
where
    M: Model,
    P: EquationProblem<N, R, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;

    match problem.residuals(&input, &output) {
        Ok(residuals) => Ok(Evaluation {
            x,
            residuals,
            snapshot: Snapshot::new(input, output),
        }),
        Err(error) => Err(EvalError::Problem(error)),
    }
}
