//! Root finding for equation problems.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals `[f64; R]`. Solvers in this module
//! drive those residuals toward zero.
//!
//! # Solvers
//!
//! - [`bisection`]: scalar, on a bracket with a sign change
//! - [`newton`]: systems of any shape, from an initial guess
//!
//! [`EquationProblem`]: yieldpoint_core::EquationProblem

mod evaluate;
mod iterate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use iterate::Iterate;

pub mod bisection;
pub mod jacobian;
pub mod newton;
