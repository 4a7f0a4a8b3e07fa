use yieldpoint_core::Snapshot;

use crate::equation::{Evaluation, Iterate};

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual norm reached the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton solve.
///
/// `trace` holds every guess and its residuals, starting with the initial
/// guess, so `trace.len() == iters + 1`. The top-level fields describe the
/// last entry.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize, const R: usize> {
    /// Final solver status.
    pub status: Status,

    /// Final guess.
    pub x: [f64; N],

    /// Residuals at the final guess.
    pub residuals: [f64; R],

    /// Snapshot at the final guess.
    pub snapshot: Snapshot<I, O>,

    /// Every guess visited, in order.
    pub trace: Vec<Iterate<N, R>>,

    /// Number of Newton iterations performed.
    pub iters: usize,
}

impl<I, O, const N: usize, const R: usize> Solution<I, O, N, R> {
    pub(super) fn from_eval(
        eval: Evaluation<I, O, N, R>,
        trace: Vec<Iterate<N, R>>,
        status: Status,
        iters: usize,
    ) -> Self {
        Self {
            status,
            x: eval.x,
            residuals: eval.residuals,
            snapshot: eval.snapshot,
            trace,
            iters,
        }
    }

    /// Returns the Euclidean norm of the final residuals.
    #[must_use]
    pub fn residual_norm(&self) -> f64 {
        crate::equation::iterate::norm(&self.residuals)
    }

    /// Returns true if the solver stopped because it converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
