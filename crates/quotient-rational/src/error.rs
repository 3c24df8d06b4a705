//! Error types for rational construction and interactive input.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when building or reading a rational.
///
/// Arithmetic never returns these: a zero denominator reached through
/// [`Rational::new`](crate::Rational::new) or an operator is a panic.
#[derive(Debug, Error)]
pub enum RationalError {
    /// A zero denominator was supplied.
    #[error("denominator cannot be zero")]
    InvalidDenominator,

    /// The input source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A token in the input was not an integer.
    #[error("expected an integer, found {token:?}")]
    Parse {
        /// The offending token.
        token: String,
        /// Why it did not parse.
        #[source]
        source: ParseIntError,
    },

    /// The input ended before both integers were read.
    #[error("unexpected end of input")]
    UnexpectedEof,
}
