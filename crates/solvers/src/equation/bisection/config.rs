use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be positive")]
    Tolerance,

    #[error("max_iters must be positive")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            residual_tol: 1e-3,
        }
    }
}

impl Config {
    /// Creates a new config with validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of bisection iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual magnitude at or below which a midpoint is a root.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
