use thiserror::Error;

use crate::equation::jacobian::DEFAULT_EPSILON;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    epsilon: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be positive")]
    Tolerance,

    #[error("maxiter must be positive")]
    MaxIters,

    #[error("epsilon must be positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            residual_tol: 1e-6,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Config {
    /// Creates a new config with validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` or `epsilon` is not finite and
    /// positive, or if `max_iters` is zero.
    pub fn new(max_iters: usize, residual_tol: f64, epsilon: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            max_iters,
            residual_tol,
            epsilon,
        })
    }

    /// Returns the maximum number of Newton iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual norm at or below which the solver has converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the perturbation scale for the finite-difference Jacobian.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}
