//! Fixed-width rational numbers.
//!
//! A [`Rational`] is an `i64` numerator over a positive `i64` denominator,
//! stored in lowest terms. Every constructor and setter canonicalizes.

use num_traits::{One, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::RationalError;

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(a, 0) == a`. Intended for non-negative arguments.
#[must_use]
pub const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

const fn gcd_unsigned(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// An exact rational number with `i64` components.
///
/// The denominator is always positive and shares no factor with the
/// numerator; zero is stored as `0/1`. The only way to break this is the
/// raw accessor [`Rational::field_mut`].
#[derive(Clone, Copy)]
pub struct Rational {
    pub(crate) numerator: i64,
    pub(crate) denominator: i64,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        let mut r = Self {
            numerator,
            denominator,
        };
        r.canonicalize();
        r
    }

    /// Creates a new rational, reporting a zero denominator as an error.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidDenominator`] if the denominator is zero.
    pub fn try_new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::new(numerator, denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Replaces the numerator and reduces.
    pub fn set_numerator(&mut self, n: i64) {
        self.numerator = n;
        self.canonicalize();
    }

    /// Replaces the denominator, then moves the sign to the numerator and reduces.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    pub fn set_denominator(&mut self, d: i64) {
        self.denominator = d;
        self.canonicalize();
    }

    /// Restores the canonical form: positive denominator, lowest terms.
    ///
    /// Only needed after writing through [`Rational::field_mut`].
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    pub fn canonicalize(&mut self) {
        assert!(self.denominator != 0, "denominator cannot be zero");
        self.normalize();
        self.reduce();
    }

    fn normalize(&mut self) {
        if self.denominator < 0 {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }
    }

    fn reduce(&mut self) {
        // integers are already in lowest terms
        if self.denominator != 1 {
            // unsigned so that an `i64::MIN` numerator reduces too
            let g = gcd_unsigned(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
            // g divides the positive denominator, so it fits in i64
            #[allow(clippy::cast_possible_wrap)]
            let g = g as i64;
            self.numerator /= g;
            self.denominator /= g;
        }
    }

    /// Returns an equal copy (unary plus).
    #[must_use]
    pub const fn pos(self) -> Self {
        self
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub const fn to_integer(&self) -> Option<i64> {
        if self.is_integer() {
            Some(self.numerator)
        } else {
            None
        }
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the numerator is `i64::MIN`, whose absolute
    /// value has no `i64` representation.
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(&self) -> i64 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Adds one in place and returns the updated value (`++x`).
    pub fn pre_increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Subtracts one in place and returns the updated value (`--x`).
    pub fn pre_decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Adds one in place and returns the value held before (`x++`).
    #[must_use = "use `pre_increment` to discard the prior value"]
    pub fn post_increment(&mut self) -> Self {
        let prior = *self;
        *self += 1;
        prior
    }

    /// Subtracts one in place and returns the value held before (`x--`).
    #[must_use = "use `pre_decrement` to discard the prior value"]
    pub fn post_decrement(&mut self) -> Self {
        let prior = *self;
        *self -= 1;
        prior
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }
}

// Canonical values are equal exactly when their components are.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

/// Renders `N`, `N/D`, or for improper fractions `N/D = Q + R/D`.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, d) = (self.numerator, self.denominator);

        if d == 1 {
            return write!(f, "{n}");
        }

        write!(f, "{n}/{d}")?;

        if n.unsigned_abs() > d.unsigned_abs() {
            write!(f, " = {} + {}/{d}", n / d, n % d)?;
        }

        Ok(())
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
