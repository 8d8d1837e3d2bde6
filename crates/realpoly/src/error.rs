//! Errors raised by coefficient access and mutation.

use thiserror::Error;

/// Errors that can occur when addressing a coefficient by exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The exponent was below zero.
    #[error("negative exponent {exponent}: exponents must be >= 0")]
    NegativeExponent {
        /// The rejected exponent.
        exponent: i64,
    },

    /// The exponent cannot be addressed on this platform.
    #[error("exponent {exponent} exceeds the addressable coefficient range")]
    ExponentOutOfRange {
        /// The rejected exponent.
        exponent: i64,
    },
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
