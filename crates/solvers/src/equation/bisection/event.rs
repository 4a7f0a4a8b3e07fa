use crate::equation::Evaluation;

/// Iteration event emitted by the bisection solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Search bracket the midpoint was taken from.
    pub bracket: [f64; 2],
    /// Evaluation at the current midpoint.
    pub eval: &'a Evaluation<I, O, 1>,
}
