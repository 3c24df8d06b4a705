//! # Quotient
//!
//! Exact rational arithmetic over fixed-width integers.
//!
//! ## Quick Start
//!
//! ```rust
//! use quotient::prelude::*;
//!
//! let mut x = Rational::new(3, 2);
//! let before = x.post_increment();
//! assert_eq!(before, Rational::new(3, 2));
//! assert_eq!(x.to_string(), "5/2 = 2 + 1/2");
//! assert!(1 + Rational::new(1, 2) == Rational::new(1, 2) + 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quotient_rational as rational;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quotient_rational::{gcd, Field, Rational, RationalError};
}
