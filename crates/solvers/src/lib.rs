//! Root finders for equation problems.
//!
//! Solvers take a [`Model`] paired with an [`EquationProblem`], or a plain
//! closure through the `solve_fn` helpers, and drive the residuals toward zero.
//!
//! - [`equation::bisection`]: scalar root finding on a sign-changing bracket
//! - [`equation::newton`]: Newton iteration on square, under-determined and
//!   over-determined systems using a finite-difference Jacobian
//! - [`equation::jacobian`]: the centered-difference Jacobian estimator
//!
//! Neither solver treats running out of iterations as an error. Each returns a
//! solution whose `status` records whether it converged, and callers are
//! expected to check it.
//!
//! [`Model`]: yieldpoint_core::Model
//! [`EquationProblem`]: yieldpoint_core::EquationProblem

pub mod equation;
