//! Error types for numeric operations.
//!
//! Only malformed input fails: values of different kinds, vectors of
//! different lengths, or an attempt to build an empty vector.

use crate::value::ValueKind;
use thiserror::Error;

/// Errors produced by the numeric operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Two vectors do not have the same number of elements.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// A scalar was combined with a vector.
    #[error("Kind mismatch: cannot combine {left} with {right}")]
    KindMismatch {
        /// Kind of the left operand
        left: ValueKind,
        /// Kind of the right operand
        right: ValueKind,
    },

    /// A vector was constructed with no elements.
    #[error("Vector must have at least one element")]
    EmptyVector,

    /// A quantifier name could not be parsed.
    #[error("Invalid quantifier '{input}': expected 'any' or 'all'")]
    InvalidQuantifier {
        /// The rejected input
        input: String,
    },
}

impl NumericError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a KindMismatch error.
    pub const fn kind_mismatch(left: ValueKind, right: ValueKind) -> Self {
        Self::KindMismatch { left, right }
    }

    /// Create an InvalidQuantifier error.
    pub fn invalid_quantifier<S: Into<String>>(input: S) -> Self {
        Self::InvalidQuantifier {
            input: input.into(),
        }
    }
}

/// Result type alias for numeric operations.
pub type Result<T> = std::result::Result<T, NumericError>;
