//! Shared traits for the yieldpoint root finders.
//!
//! A [`Model`] maps a typed input to a typed output. An [`EquationProblem`]
//! says how solver variables become a model input and how the model output
//! becomes residuals. Solvers report progress to an [`Observer`], and every
//! evaluation is kept as a [`Snapshot`] of the model call.
//!
//! For plain closures, [`FnEquation`] plays both roles at once.

mod model;
mod observer;
mod problems;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::{EquationProblem, FnEquation};
