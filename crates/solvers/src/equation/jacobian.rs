//! Finite-difference Jacobian estimation.
//!
//! The Jacobian of `f: ℝᴺ → ℝᴿ` is estimated column by column with centered
//! differences:
//!
//! ```text
//! J[:, i] = (f(x + hᵢ·eᵢ) − f(x − hᵢ·eᵢ)) / (2·hᵢ)
//! hᵢ      = max(ε, xᵢ·√ε)
//! ```
//!
//! The step scales with `xᵢ` and is floored at `ε`, so components at or
//! below zero still get a usable perturbation. The estimate costs `2·N`
//! evaluations of `f`.
//!
//! No conditioning is enforced. A singular or ill-conditioned result is
//! returned as-is and it is up to the caller to cope with it.

use nalgebra::DMatrix;
use thiserror::Error;

/// Default perturbation scale: machine epsilon for `f64`, rounded.
pub const DEFAULT_EPSILON: f64 = 2.22e-16;

/// Errors that can occur when estimating a Jacobian.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("epsilon must be positive, got {epsilon}")]
    InvalidEpsilon { epsilon: f64 },

    #[error("function evaluation failed")]
    Function(#[source] E),
}

/// Estimates the `R × N` Jacobian of `f` at `x`.
///
/// # Errors
///
/// Returns [`Error::InvalidEpsilon`] if `epsilon` is not finite and positive,
/// or [`Error::Function`] if any evaluation of `f` fails.
pub fn estimate<F, E, const N: usize, const R: usize>(
    f: F,
    x: &[f64; N],
    epsilon: f64,
) -> Result<DMatrix<f64>, Error<E>>
where
    F: FnMut(&[f64; N]) -> Result<[f64; R], E>,
{
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(Error::InvalidEpsilon { epsilon });
    }
    central_difference(f, x, epsilon).map_err(Error::Function)
}

/// Returns the perturbation used for a component with value `x_i`.
#[must_use]
pub fn perturbation(x_i: f64, epsilon: f64) -> f64 {
    let scaled = x_i * epsilon.sqrt();
    if scaled < epsilon { epsilon } else { scaled }
}

/// Centered-difference Jacobian without validating `epsilon`.
pub(crate) fn central_difference<F, E, const N: usize, const R: usize>(
    mut f: F,
    x: &[f64; N],
    epsilon: f64,
) -> Result<DMatrix<f64>, E>
where
    F: FnMut(&[f64; N]) -> Result<[f64; R], E>,
{
    let mut jacobian = DMatrix::zeros(R, N);

    for col in 0..N {
        let h = perturbation(x[col], epsilon);

        let mut forward = *x;
        forward[col] += h;
        let mut backward = *x;
        backward[col] -= h;

        let f_forward = f(&forward)?;
        let f_backward = f(&backward)?;

        for (row, (a, b)) in f_forward.iter().zip(&f_backward).enumerate() {
            jacobian[(row, col)] = (a - b) / (2.0 * h);
        }
    }

    Ok(jacobian)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn ok<const R: usize>(values: [f64; R]) -> Result<[f64; R], Infallible> {
        Ok(values)
    }

    #[test]
    fn perturbation_scales_with_x() {
        let eps = 1e-10;
        assert_relative_eq!(perturbation(4.0, eps), 4.0 * 1e-5);
    }

    #[test]
    fn perturbation_is_floored_at_epsilon() {
        let eps = 1e-10;
        assert_relative_eq!(perturbation(0.0, eps), eps);
        assert_relative_eq!(perturbation(-3.0, eps), eps);
    }

    #[test]
    fn square_jacobian_of_polynomial_system() {
        // f(x, y) = (x² + y, x·y)  →  J = [[2x, 1], [y, x]]
        let j = estimate(
            |x: &[f64; 2]| ok([x[0] * x[0] + x[1], x[0] * x[1]]),
            &[3.0, 2.0],
            DEFAULT_EPSILON,
        )
        .unwrap();

        assert_eq!(j.shape(), (2, 2));
        assert_relative_eq!(j[(0, 0)], 6.0, epsilon = 1e-6);
        assert_relative_eq!(j[(0, 1)], 1.0, epsilon = 1e-6);
        assert_relative_eq!(j[(1, 0)], 2.0, epsilon = 1e-6);
        assert_relative_eq!(j[(1, 1)], 3.0, epsilon = 1e-6);
    }

    #[test]
    fn wide_and_tall_shapes() {
        let wide = estimate(
            |x: &[f64; 3]| ok([x[0] + 2.0 * x[1] + 3.0 * x[2]]),
            &[1.0, 1.0, 1.0],
            DEFAULT_EPSILON,
        )
        .unwrap();
        assert_eq!(wide.shape(), (1, 3));
        assert_relative_eq!(wide[(0, 2)], 3.0, epsilon = 1e-6);

        let tall = estimate(
            |x: &[f64; 1]| ok([x[0], -x[0], 5.0 * x[0]]),
            &[2.0],
            DEFAULT_EPSILON,
        )
        .unwrap();
        assert_eq!(tall.shape(), (3, 1));
        assert_relative_eq!(tall[(1, 0)], -1.0, epsilon = 1e-6);
        assert_relative_eq!(tall[(2, 0)], 5.0, epsilon = 1e-6);
    }

    #[test]
    fn uses_two_evaluations_per_column() {
        let mut calls = 0;
        let _ = estimate(
            |x: &[f64; 4]| {
                calls += 1;
                ok([x.iter().sum::<f64>()])
            },
            &[1.0; 4],
            DEFAULT_EPSILON,
        )
        .unwrap();

        assert_eq!(calls, 8);
    }

    #[test]
    fn singular_jacobian_is_passed_through() {
        // Constant function: every derivative is zero.
        let j = estimate(|_: &[f64; 2]| ok([1.0, 1.0]), &[0.5, 0.5], DEFAULT_EPSILON).unwrap();
        assert!(j.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        let result = estimate(|x: &[f64; 1]| ok([x[0]]), &[1.0], 0.0);
        assert!(matches!(result, Err(Error::InvalidEpsilon { .. })));

        let result = estimate(|x: &[f64; 1]| ok([x[0]]), &[1.0], -1e-8);
        assert!(matches!(result, Err(Error::InvalidEpsilon { .. })));
    }

    #[test]
    fn function_errors_propagate() {
        #[derive(Debug, Error)]
        #[error("boom")]
        struct Boom;

        let result = estimate(|_: &[f64; 1]| Err::<[f64; 1], _>(Boom), &[1.0], DEFAULT_EPSILON);
        assert!(matches!(result, Err(Error::Function(Boom))));
    }
}
