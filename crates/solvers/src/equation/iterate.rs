use nalgebra::DVectorView;

use super::Evaluation;

/// One entry of a solver trace: a guess and the residuals at that guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate<const N: usize, const R: usize = N> {
    pub x: [f64; N],
    pub residuals: [f64; R],
}

impl<const N: usize, const R: usize> Iterate<N, R> {
    /// Returns the Euclidean norm of the residuals.
    #[must_use]
    pub fn residual_norm(&self) -> f64 {
        norm(&self.residuals)
    }
}

impl<I, O, const N: usize, const R: usize> From<&Evaluation<I, O, N, R>> for Iterate<N, R> {
    fn from(eval: &Evaluation<I, O, N, R>) -> Self {
        Self {
            x: eval.x,
            residuals: eval.residuals,
        }
    }
}

/// Euclidean norm of a slice.
pub(crate) fn norm(values: &[f64]) -> f64 {
    DVectorView::from_slice(values, values.len()).norm()
}
