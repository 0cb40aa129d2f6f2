//! Error types for the Accrue library.
//!
//! Every fallible operation in `accrue-core` returns [`AccrueResult`]. Solver
//! failures from `accrue-math` are folded into [`AccrueError::NonConvergence`]
//! so callers see one failure mode for a yield that could not be found.

use accrue_math::MathError;
use thiserror::Error;

/// A specialized Result type for Accrue operations.
pub type AccrueResult<T> = Result<T, AccrueError>;

/// The main error type for Accrue operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccrueError {
    /// Unsupported number of compounding periods per year.
    #[error("Invalid frequency: {periods_per_year} periods per year (expected 1, 2, 4 or 12)")]
    InvalidFrequency {
        /// The rejected number of periods per year.
        periods_per_year: u32,
    },

    /// Yield solver did not converge.
    #[error("No convergence after {iterations} iterations (last estimate: {last_estimate}, residual: {residual:.2e})")]
    NonConvergence {
        /// Iterations performed before giving up.
        iterations: u32,
        /// The last rate the solver reached.
        last_estimate: f64,
        /// NPV at the last estimate (NaN when it could not be evaluated).
        residual: f64,
    },

    /// A rate and time outside the domain of the compounding convention.
    #[error("Domain error: {reason}")]
    DomainError {
        /// Description of the invalid computation.
        reason: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl AccrueError {
    /// Creates an invalid frequency error.
    #[must_use]
    pub fn invalid_frequency(periods_per_year: u32) -> Self {
        Self::InvalidFrequency { periods_per_year }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain_error(reason: impl Into<String>) -> Self {
        Self::DomainError {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a solver non-convergence.
    #[must_use]
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::NonConvergence { .. })
    }
}

impl From<MathError> for AccrueError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                last_estimate,
                residual,
            } => Self::NonConvergence {
                iterations,
                last_estimate,
                residual,
            },
            MathError::ZeroDerivative { x, iterations }
            | MathError::NonFiniteValue { x, iterations } => Self::NonConvergence {
                iterations,
                last_estimate: x,
                residual: f64::NAN,
            },
            MathError::InvalidInput { reason } => Self::InvalidInput { reason },
        }
    }
}
