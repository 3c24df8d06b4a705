//! Operators for [`Rational`].
//!
//! Each binary operator comes in three pairings: `Rational ⊗ Rational`,
//! `Rational ⊗ i64` and `i64 ⊗ Rational`. Results always go through
//! [`Rational::new`], so they are canonical and a zero divisor panics.
//!
//! Comparisons cross-multiply instead of dividing: `a/b < c/d` iff
//! `a·d < c·b`, which relies on both denominators being positive.

#![allow(clippy::suspicious_arithmetic_impl)]

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::Rational;

// Arithmetic operations

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::new(
            self.numerator * rhs.denominator + self.denominator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Add<i64> for Rational {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Rational::new(self.numerator + self.denominator * rhs, self.denominator)
    }
}

impl Add<Rational> for i64 {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Self::Output {
        Rational::new(self * rhs.denominator + rhs.numerator, rhs.denominator)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::new(
            self.numerator * rhs.denominator - self.denominator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Sub<i64> for Rational {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Rational::new(self.numerator - self.denominator * rhs, self.denominator)
    }
}

impl Sub<Rational> for i64 {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Self::Output {
        Rational::new(self * rhs.denominator - rhs.numerator, rhs.denominator)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::new(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Mul<i64> for Rational {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Rational::new(self.numerator * rhs, self.denominator)
    }
}

impl Mul<Rational> for i64 {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Self::Output {
        Rational::new(self * rhs.numerator, rhs.denominator)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Rational::new(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        )
    }
}

impl Div<i64> for Rational {
    type Output = Self;

    fn div(self, rhs: i64) -> Self::Output {
        Rational::new(self.numerator, self.denominator * rhs)
    }
}

impl Div<Rational> for i64 {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Self::Output {
        Rational::new(self * rhs.denominator, rhs.numerator)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -1
    }
}

// Compound assignment: compute through the constructor, then replace.

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<i64> for Rational {
    fn add_assign(&mut self, rhs: i64) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<i64> for Rational {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<i64> for Rational {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<i64> for Rational {
    fn div_assign(&mut self, rhs: i64) {
        *self = *self / rhs;
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

// Comparison

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.numerator * other.denominator == other.numerator * self.denominator
    }
}

impl Eq for Rational {}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.numerator == self.denominator * other
    }
}

impl PartialEq<Rational> for i64 {
    fn eq(&self, other: &Rational) -> bool {
        self * other.denominator == other.numerator
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.numerator.cmp(&(self.denominator * other)))
    }

    #[allow(clippy::nonminimal_bool)]
    fn le(&self, other: &i64) -> bool {
        !(self > other)
    }

    #[allow(clippy::nonminimal_bool)]
    fn ge(&self, other: &i64) -> bool {
        !(self < other)
    }
}

impl PartialOrd<Rational> for i64 {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some((self * other.denominator).cmp(&other.numerator))
    }

    #[allow(clippy::nonminimal_bool)]
    fn le(&self, other: &Rational) -> bool {
        !(self > other)
    }

    #[allow(clippy::nonminimal_bool)]
    fn ge(&self, other: &Rational) -> bool {
        !(self < other)
    }
}
