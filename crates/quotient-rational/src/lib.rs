//! # quotient-rational
//!
//! Exact rational arithmetic over fixed-width integers.
//!
//! This crate provides:
//! - A `Copy` rational type (`Rational`) stored as an `i64` pair in lowest terms
//! - Operators mixing `Rational` and `i64` in either operand position
//! - Mixed-number formatting and an interactive two-integer reader
//!
//! ## Overflow
//!
//! Numerators and denominators are plain `i64`. Cross-multiplication in
//! arithmetic and comparisons is unchecked, so very large components overflow
//! exactly as `i64` does in the current build profile.
//!
//! ## Example
//!
//! ```
//! use quotient_rational::Rational;
//!
//! let half = Rational::new(1, 2);
//! assert_eq!(half + 1, Rational::new(3, 2));
//! assert_eq!(Rational::new(7, 2).to_string(), "7/2 = 3 + 1/2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod field;
pub mod io;
pub mod ops;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use field::Field;
pub use rational::{gcd, Rational};
