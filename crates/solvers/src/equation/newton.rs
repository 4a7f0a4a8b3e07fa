//! Newton's method for systems of nonlinear equations.
//!
//! # Algorithm
//!
//! Starting from `x₀`, each iteration estimates the Jacobian `J` at the
//! current guess with centered finite differences, then steps
//!
//! ```text
//! xₖ₊₁ = xₖ − J⁺·f(xₖ)
//! ```
//!
//! where `J⁺` is chosen from the shape of the system:
//!
//! - `N == R`: the ordinary inverse `J⁻¹`
//! - `N > R`: the right pseudo-inverse `Jᵀ(JJᵀ)⁻¹` (minimum-norm step)
//! - `N < R`: the left pseudo-inverse `(JᵀJ)⁻¹Jᵀ` (least-squares step)
//!
//! The Jacobian is rebuilt at every iteration. It is never reused.
//!
//! # Termination
//!
//! The solver converges when `‖f(x)‖₂ ≤ residual_tol`. If the initial guess
//! already satisfies this, no iteration is performed and the trace has a
//! single entry.
//!
//! Exhausting `max_iters` is **not** an error: the solver returns the trace
//! it accumulated with [`Status::MaxIters`]. Callers must inspect
//! [`Solution::status`] (or the residual norm) to detect non-convergence.
//!
//! A singular matrix during the step is reported as
//! [`Error::SingularMatrix`] and ends the solve. It is not retried.
//!
//! Divergence to a NaN or infinite residual is also an error,
//! [`Error::NonFiniteResidual`], and not a [`Status::MaxIters`] solution. The
//! error names the iteration and the offending `x`, but the trace gathered up
//! to that point is discarded.
//!
//! # Example
//!
//! ```
//! use yieldpoint_solvers::equation::newton::{self, Config, Status};
//!
//! let solution = newton::solve_fn(|x: &[f64; 1]| [x[0] * x[0] - 2.0], [1.0], &Config::default())?;
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x[0] - 2f64.sqrt()).abs() < 1e-6);
//! assert_eq!(solution.trace.len(), solution.iters + 1);
//! # Ok::<(), newton::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;
mod step;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use step::Shape;

use nalgebra::DVector;
use tracing::{debug, trace};
use yieldpoint_core::{EquationProblem, FnEquation, Model, Observer};

use crate::equation::{Evaluation, Iterate, evaluate, iterate::norm, jacobian};

use step::newton_step;

/// Finds a root of the equation problem using Newton's method.
///
/// The observer receives an [`Event`] after every iteration and may return
/// [`Action::StopEarly`] to halt.
///
/// # Errors
///
/// Returns an error if the system has no variables or no residuals, if a
/// residual is non-finite, if the step matrix is singular, or if the model
/// or problem fails during evaluation.
pub fn solve<M, P, Obs, const N: usize, const R: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N, R>, Error>
where
    M: Model,
    P: EquationProblem<N, R, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N, R>, Action>,
{
    if N == 0 {
        return Err(Error::EmptyInput);
    }
    if R == 0 {
        return Err(Error::EmptyOutput);
    }

    let shape = Shape::of(N, R);
    let tol = config.residual_tol();

    let mut current = evaluate::<M, P, N, R>(model, problem, x0)?;
    ensure_finite(&current, 0)?;

    let mut trace = Vec::new();
    trace.push(Iterate::from(&current));

    let mut residual_norm = norm(&current.residuals);
    if residual_norm <= tol {
        debug!(residual_norm, "initial guess already satisfies tolerance");
        return Ok(Solution::from_eval(current, trace, Status::Converged, 0));
    }

    for iter in 1..=config.max_iters() {
        let jacobian = jacobian::central_difference(
            |x: &[f64; N]| evaluate::<M, P, N, R>(model, problem, *x).map(|eval| eval.residuals),
            &current.x,
            config.epsilon(),
        )?;

        let residuals = DVector::from_column_slice(&current.residuals);
        let step = newton_step(&jacobian, &residuals).ok_or(Error::SingularMatrix { iter, shape })?;

        let mut x = current.x;
        for (x_i, step_i) in x.iter_mut().zip(step.iter()) {
            *x_i -= step_i;
        }

        let next = evaluate::<M, P, N, R>(model, problem, x)?;
        ensure_finite(&next, iter)?;
        trace.push(Iterate::from(&next));

        residual_norm = norm(&next.residuals);
        let step_norm = step.norm();
        trace!(iter, residual_norm, step_norm, %shape, "newton iteration");

        let event = Event {
            iter,
            eval: &next,
            residual_norm,
            step_norm,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iter, residual_norm, "newton stopped by observer");
            return Ok(Solution::from_eval(
                next,
                trace,
                Status::StoppedByObserver,
                iter,
            ));
        }

        current = next;

        if residual_norm <= tol {
            debug!(iters = iter, residual_norm, "newton converged");
            return Ok(Solution::from_eval(current, trace, Status::Converged, iter));
        }
    }

    debug!(
        max_iters = config.max_iters(),
        residual_norm, "newton reached the iteration limit without converging"
    );
    Ok(Solution::from_eval(
        current,
        trace,
        Status::MaxIters,
        config.max_iters(),
    ))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P, const N: usize, const R: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N, R>, Error>
where
    M: Model,
    P: EquationProblem<N, R, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}

/// Runs Newton's method on a closure mapping `N` variables to `R` residuals.
///
/// Scalar functions use `N = 1` and/or `R = 1`.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_fn<F, const N: usize, const R: usize>(
    f: F,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<[f64; N], [f64; R], N, R>, Error>
where
    F: Fn(&[f64; N]) -> [f64; R],
{
    let equation = FnEquation::new(f);
    solve_unobserved(&equation, &equation, x0, config)
}

fn ensure_finite<I, O, const N: usize, const R: usize>(
    eval: &Evaluation<I, O, N, R>,
    iter: usize,
) -> Result<(), Error> {
    if eval.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteResidual {
            iter,
            x: eval.x.to_vec(),
        })
    }
}
