//! Error types for numerical integration operations.

use thiserror::Error;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during numerical integration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrateError {
    /// The subdivision limit was reached before the tolerance was met.
    ///
    /// Carries the estimate reached at the point of failure so a caller can
    /// still decide to accept it.
    #[error(
        "{context}: did not converge within {intervals} intervals \
         (integral: {integral}, error: {error:.2e}, tolerance: {tolerance:.2e})"
    )]
    DidNotConverge {
        integral: f64,
        error: f64,
        intervals: usize,
        tolerance: f64,
        context: String,
    },

    /// Invalid interval provided (e.g., a >= b).
    #[error("Invalid interval [{a}, {b}] in {context}: bounds must satisfy a < b")]
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid parameter value.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Invalid input array size or dimensions.
    #[error("Invalid input: {context}")]
    InvalidInput { context: String },

    /// The integrand itself failed.
    #[error("Integrand evaluation failed: {message}")]
    Evaluation { message: String },
}

impl IntegrateError {
    /// The `(integral, error)` pair reached before giving up, if this is a
    /// convergence failure.
    pub fn partial_estimate(&self) -> Option<(f64, f64)> {
        match self {
            Self::DidNotConverge {
                integral, error, ..
            } => Some((*integral, *error)),
            _ => None,
        }
    }

    /// Whether the error was caused by bad arguments rather than by the
    /// integration itself.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidInterval { .. } | Self::InvalidParameter { .. }
        )
    }
}
