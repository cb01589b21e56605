// ============================================================================
// Numeric Errors
// Error types for the strict (Result-returning) operation variants
// ============================================================================

use std::fmt;

/// Errors reported by the strict operation variants.
///
/// The sentinel-returning functions never produce these; they fold every
/// precondition failure into a fixed sentinel value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// An argument was NaN or positive/negative infinity
    NonFiniteInput,
    /// The divisor of a modulo operation was zero or negative
    NonPositiveDivisor,
    /// The operation requires a strictly positive input
    NonPositiveInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NonFiniteInput => {
                write!(f, "non-finite input: argument was NaN or infinite")
            },
            NumericError::NonPositiveDivisor => {
                write!(f, "non-positive divisor: modulo requires a divisor > 0")
            },
            NumericError::NonPositiveInput => {
                write!(f, "non-positive input: operation requires a value > 0")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for strict numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
