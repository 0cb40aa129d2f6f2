//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm exhausted its iteration cap.
    #[error("Convergence failed after {iterations} iterations (last estimate: {last_estimate}, residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// The last iterate reached before giving up.
        last_estimate: f64,
        /// Function value at the last iterate.
        residual: f64,
    },

    /// The derivative (or secant slope) vanished, so no step can be taken.
    #[error("Zero derivative at x = {x} after {iterations} iterations")]
    ZeroDerivative {
        /// Point where the derivative vanished.
        x: f64,
        /// Iterations completed before the failure.
        iterations: u32,
    },

    /// The function or the iterate stopped being a finite number.
    #[error("Non-finite value at x = {x} after {iterations} iterations")]
    NonFiniteValue {
        /// The offending point.
        x: f64,
        /// Iterations completed before the failure.
        iterations: u32,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, last_estimate: f64, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            last_estimate,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns the last point the solver reached, if the error carries one.
    #[must_use]
    pub fn last_estimate(&self) -> Option<f64> {
        match self {
            Self::ConvergenceFailed { last_estimate, .. } => Some(*last_estimate),
            Self::ZeroDerivative { x, .. } | Self::NonFiniteValue { x, .. } => Some(*x),
            Self::InvalidInput { .. } => None,
        }
    }
}
