use std::convert::Infallible;

use crate::Model;

/// Defines an equation problem to be solved.
///
/// An equation problem maps solver variables to a model input, then computes
/// residuals from the model input and output. Solvers drive the residuals
/// toward zero.
///
/// The const generic `N` is the number of solver variables and `R` is the
/// number of residuals. `R` defaults to `N`, the square case. Solvers that
/// support non-square systems (such as Newton with a generalized inverse)
/// accept any `R`; scalar solvers such as bisection require
/// `EquationProblem<1>`.
pub trait EquationProblem<const N: usize, const R: usize = N> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(&self, input: &Self::Input, output: &Self::Output)
    -> Result<[f64; R], Self::Error>;
}

/// A closure that acts as both model and equation problem.
///
/// The closure receives the solver variables directly and returns the
/// residuals, so `x` is the model input and the model output is the residual
/// vector. Scalars are `[f64; 1]`.
///
/// ```
/// use yieldpoint_core::{EquationProblem, FnEquation, Model};
///
/// let eq = FnEquation::new(|x: &[f64; 2]| [x[0] + x[1] - 3.0]);
/// let output = eq.call(&[1.0, 1.0]).unwrap();
/// let residuals = eq.residuals(&[1.0, 1.0], &output).unwrap();
/// assert_eq!(residuals, [-1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnEquation<F, const N: usize, const R: usize> {
    func: F,
}

impl<F, const N: usize, const R: usize> FnEquation<F, N, R>
where
    F: Fn(&[f64; N]) -> [f64; R],
{
    /// Wraps a closure mapping `N` variables to `R` residuals.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F, const N: usize, const R: usize> Model for FnEquation<F, N, R>
where
    F: Fn(&[f64; N]) -> [f64; R],
{
    type Input = [f64; N];
    type Output = [f64; R];
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.func)(input))
    }
}

impl<F, const N: usize, const R: usize> EquationProblem<N, R> for FnEquation<F, N, R>
where
    F: Fn(&[f64; N]) -> [f64; R],
{
    type Input = [f64; N];
    type Output = [f64; R];
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; R], Self::Error> {
        Ok(*output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_equation_passes_x_through() {
        let eq = FnEquation::new(|x: &[f64; 3]| [x[0] * x[1] * x[2]]);

        let input = eq.input(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(input, [1.0, 2.0, 3.0]);

        let output = eq.call(&input).unwrap();
        assert_eq!(eq.residuals(&input, &output).unwrap(), [6.0]);
    }

    #[test]
    fn fn_equation_supports_more_residuals_than_variables() {
        let eq = FnEquation::new(|x: &[f64; 1]| [x[0] * x[0] - 1.0, x[0] + 1.0]);

        let output = eq.call(&[2.0]).unwrap();
        assert_eq!(output, [3.0, 3.0]);
    }
}
