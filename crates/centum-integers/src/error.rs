//! Error type for the fallible constructors and rational division.

use thiserror::Error;

/// Errors reported by integer and rational construction.
///
/// Addition, subtraction, multiplication and comparison are total and never
/// produce one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A digit slot outside `0..100` was passed to an explicit-digit constructor.
    #[error("invalid digit {value} at slot {index}: digit slots must lie in 0..100")]
    InvalidDigit {
        /// Position of the offending slot, least-significant first.
        index: usize,
        /// The rejected slot value.
        value: u8,
    },

    /// A rational would have a zero denominator.
    #[error("rational denominator cannot be zero")]
    ZeroDenominator,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArithmeticError>;
