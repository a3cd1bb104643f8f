//! Error type shared by every validating constructor and the evaluator.

use std::convert::Infallible;

use thiserror::Error;

/// Validation failure raised before any labeling work is done.
///
/// Each variant corresponds to one violated input constraint. The
/// messages are stable and may be shown to end users as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FizzBuzzError {
    /// The upper bound is not an integer >= 1.
    #[error("Input must be a positive integer greater than 0")]
    InvalidRange,

    /// A configuration was built with no rules.
    #[error("Configuration must contain at least one rule")]
    EmptyConfiguration,

    /// A rule divisor is not an integer >= 1.
    #[error("Rule divisors must be positive integers")]
    InvalidDivisor,

    /// A rule replacement is empty or whitespace-only.
    #[error("Rule replacements must be non-empty strings")]
    InvalidReplacement,
}

pub type Result<T> = std::result::Result<T, FizzBuzzError>;

// Identity conversions (`TryFrom<T> for T`) fail with `Infallible`.
impl From<Infallible> for FizzBuzzError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
