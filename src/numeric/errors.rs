// ============================================================================
// Numeric Errors
// Error types for segmented decimal arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during segmented decimal operations.
///
/// All errors are raised synchronously at the point of violation and
/// propagate to the caller; there is no retry or recovery logic in this
/// crate. Arithmetic is exact and deterministic, so a failure reflects a
/// precondition violation, not a transient fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Construction argument could not be parsed as a decimal literal
    InvalidInput,
    /// Attempted division by zero
    DivisionByZero,
    /// Operation is not defined for the operand (imaginary unit, or 0**0)
    UndefinedOperation,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => {
                write!(f, "invalid input: could not parse value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::UndefinedOperation => {
                write!(f, "undefined operation for this operand")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
