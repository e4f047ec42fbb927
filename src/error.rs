//! Error types for Reconocer operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Reconocer operations.
///
/// Covers the failure surface of the algebra layer (shape mismatches),
/// layer and model construction (invalid arguments), architecture
/// descriptor parsing, and dataset loading.
///
/// # Examples
///
/// ```
/// use reconocer::error::ReconocerError;
///
/// let err = ReconocerError::ShapeMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("Shape mismatch"));
/// ```
#[derive(Debug)]
pub enum ReconocerError {
    /// Operand dimensions are incompatible for the operation.
    ShapeMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid argument value provided.
    InvalidArgument {
        /// Argument name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Malformed architecture descriptor.
    InvalidArchitecture {
        /// The offending descriptor string
        descriptor: String,
        /// Reason the descriptor was rejected
        reason: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Invalid or corrupt dataset format.
    FormatError {
        /// Error description
        message: String,
    },
}

impl fmt::Display for ReconocerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconocerError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {expected}, got {actual}")
            }
            ReconocerError::InvalidArgument {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid argument: {param} = {value}, expected {constraint}"
                )
            }
            ReconocerError::InvalidArchitecture { descriptor, reason } => {
                write!(f, "Invalid architecture descriptor {descriptor:?}: {reason}")
            }
            ReconocerError::Io(e) => write!(f, "I/O error: {e}"),
            ReconocerError::FormatError { message } => {
                write!(f, "Invalid dataset format: {message}")
            }
        }
    }
}

impl std::error::Error for ReconocerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReconocerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReconocerError {
    fn from(err: std::io::Error) -> Self {
        ReconocerError::Io(err)
    }
}

impl ReconocerError {
    /// Create a shape mismatch error from two dimension descriptions.
    #[must_use]
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid argument error with a constraint description.
    #[must_use]
    pub fn invalid_argument(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ReconocerError>;
