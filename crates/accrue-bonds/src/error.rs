//! Error types for bond operations.

use accrue_core::AccrueError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// A price or yield that cannot be expressed as a decimal quote.
    #[error("Cannot quote {value} to {decimal_places} decimal places")]
    InvalidQuote {
        /// The value being quoted.
        value: f64,
        /// Requested decimal places.
        decimal_places: u32,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] AccrueError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Returns the wrapped core error, if any.
    #[must_use]
    pub fn as_core(&self) -> Option<&AccrueError> {
        match self {
            Self::Core(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::invalid_spec("par must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid bond specification: par must be positive"
        );

        let err = BondError::InvalidQuote {
            value: f64::NAN,
            decimal_places: 4,
        };
        assert!(err.to_string().contains("4 decimal places"));
    }

    #[test]
    fn test_from_core() {
        let err: BondError = AccrueError::invalid_frequency(3).into();
        assert_eq!(err.as_core(), Some(&AccrueError::invalid_frequency(3)));
        assert!(err.to_string().starts_with("Core error: Invalid frequency"));
    }
}
