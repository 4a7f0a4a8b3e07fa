use std::fmt;

use nalgebra::{DMatrix, DVector};

/// Shape of the Jacobian, which selects the generalized inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// As many variables as residuals: `J⁻¹`.
    Square,

    /// More variables than residuals: the right pseudo-inverse
    /// `Jᵀ(JJᵀ)⁻¹`, giving the minimum-norm step.
    UnderDetermined,

    /// Fewer variables than residuals: the left pseudo-inverse
    /// `(JᵀJ)⁻¹Jᵀ`, giving the least-squares step.
    OverDetermined,
}

impl Shape {
    /// Classifies a system with `n` variables and `r` residuals.
    #[must_use]
    pub fn of(n: usize, r: usize) -> Self {
        match n.cmp(&r) {
            std::cmp::Ordering::Equal => Self::Square,
            std::cmp::Ordering::Greater => Self::UnderDetermined,
            std::cmp::Ordering::Less => Self::OverDetermined,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Square => "square",
            Self::UnderDetermined => "under-determined",
            Self::OverDetermined => "over-determined",
        };
        f.write_str(name)
    }
}

/// Computes the Newton step `J⁺·y` for the given Jacobian and residuals.
///
/// Returns `None` if the matrix that must be inverted is singular.
pub(super) fn newton_step(jacobian: &DMatrix<f64>, residuals: &DVector<f64>) -> Option<DVector<f64>> {
    match Shape::of(jacobian.ncols(), jacobian.nrows()) {
        Shape::Square => jacobian
            .clone()
            .try_inverse()
            .map(|inverse| inverse * residuals),
        Shape::UnderDetermined => {
            let transpose = jacobian.transpose();
            (jacobian * &transpose)
                .try_inverse()
                .map(|inverse| &transpose * inverse * residuals)
        }
        Shape::OverDetermined => {
            let transpose = jacobian.transpose();
            (&transpose * jacobian)
                .try_inverse()
                .map(|inverse| inverse * &transpose * residuals)
        }
    }
}
