use yieldpoint_core::Snapshot;

use crate::equation::{Evaluation, Iterate};

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Found a point whose residual magnitude is within tolerance, or an
    /// endpoint that is an exact root.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Final root estimate: the last midpoint, or an exact-root endpoint.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Every midpoint evaluated, in order. Holds only the endpoint when an
    /// endpoint is an exact root.
    pub trace: Vec<Iterate<1>>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from an evaluation result.
    pub(super) fn from_eval(
        eval: Evaluation<I, O, 1>,
        trace: Vec<Iterate<1>>,
        status: Status,
        iters: usize,
    ) -> Self {
        Self {
            status,
            x: eval.x[0],
            residual: eval.residuals[0],
            snapshot: eval.snapshot,
            trace,
            iters,
        }
    }

    /// Returns true if the solver stopped because it converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
