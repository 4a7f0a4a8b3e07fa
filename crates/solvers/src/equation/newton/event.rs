use crate::equation::Evaluation;

/// Iteration event emitted by the Newton solver after each step.
#[derive(Debug)]
pub struct Event<'a, I, O, const N: usize, const R: usize> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Evaluation at the new guess.
    pub eval: &'a Evaluation<I, O, N, R>,
    /// Euclidean norm of the residuals at the new guess.
    pub residual_norm: f64,
    /// Euclidean norm of the step that produced the new guess.
    pub step_norm: f64,
}
