//! Bisection for scalar equations.
//!
//! Given a bracket `[a, b]` with `a < b` whose endpoint residuals have
//! opposite signs, the solver repeatedly evaluates the midpoint and keeps the
//! half that still contains the sign change.
//!
//! The residual is checked at each midpoint. If `|f(m)| ≤ residual_tol` the
//! midpoint is returned. Endpoints are checked only for an exact zero, in
//! which case the endpoint is returned without iterating.
//!
//! Reaching `max_iters` returns the last midpoint with [`Status::MaxIters`].
//!
//! # Example
//!
//! ```
//! use yieldpoint_solvers::equation::bisection::{self, Config, Status};
//!
//! let config = Config::new(50, 1e-3)?;
//! let solution = bisection::solve_fn(|x| x * x - 2.0, [0.0, 2.0], &config)?;
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 1.414_062_5).abs() < 1e-12);
//! assert_eq!(solution.trace.len(), solution.iters);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use tracing::{debug, trace};
use yieldpoint_core::{EquationProblem, FnEquation, Model, Observer};

use crate::equation::{Evaluation, Iterate, evaluate};

use bracket::Bounds;

/// Finds a root of a scalar equation problem by bisection.
///
/// The observer receives an [`Event`] after each midpoint evaluation and may
/// return [`Action::StopEarly`] to halt.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, if a residual is non-finite,
/// or if the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bounds = Bounds::new(bracket)?;

    let left = evaluate_finite(model, problem, bounds.left())?;
    if left.residuals[0] == 0.0 {
        debug!(x = bounds.left(), "left endpoint is an exact root");
        return Ok(exact_root(left));
    }

    let right = evaluate_finite(model, problem, bounds.right())?;
    if right.residuals[0] == 0.0 {
        debug!(x = bounds.right(), "right endpoint is an exact root");
        return Ok(exact_root(right));
    }

    let mut bracket = Bracket::new(
        bounds,
        Sign::of(left.residuals[0]),
        Sign::of(right.residuals[0]),
    )?;

    let tol = config.residual_tol();
    let mut trace = Vec::new();
    let mut iter = 0;

    loop {
        iter += 1;

        let mid = bracket.midpoint();
        let eval = evaluate_finite(model, problem, mid)?;
        trace.push(Iterate::from(&eval));

        let residual = eval.residuals[0];
        trace!(iter, x = mid, residual, width = bracket.width(), "bisection iteration");

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &eval,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iter, x = mid, "bisection stopped by observer");
            return Ok(Solution::from_eval(
                eval,
                trace,
                Status::StoppedByObserver,
                iter,
            ));
        }

        if residual.abs() <= tol {
            debug!(iters = iter, x = mid, residual, "bisection converged");
            return Ok(Solution::from_eval(eval, trace, Status::Converged, iter));
        }

        if iter >= config.max_iters() {
            debug!(
                max_iters = iter,
                x = mid,
                residual,
                "bisection reached the iteration limit without converging"
            );
            return Ok(Solution::from_eval(eval, trace, Status::MaxIters, iter));
        }

        bracket.shrink(mid, Sign::of(residual));
    }
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Runs bisection on a scalar closure.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_fn<F>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<[f64; 1], [f64; 1]>, Error>
where
    F: Fn(f64) -> f64,
{
    let equation = FnEquation::new(move |x: &[f64; 1]| [f(x[0])]);
    solve_unobserved(&equation, &equation, bracket, config)
}

fn evaluate_finite<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate::<M, P, 1, 1>(model, problem, [x])?;
    let residual = eval.residuals[0];
    if residual.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

fn exact_root<I, O>(eval: Evaluation<I, O, 1>) -> Solution<I, O> {
    let trace = vec![Iterate::from(&eval)];
    Solution::from_eval(eval, trace, Status::Converged, 0)
}
