//! Raw access to the stored components.
//!
//! Writes made through [`Rational::field_mut`] skip canonicalization. The
//! caller owns the invariants afterwards and can restore them with
//! [`Rational::canonicalize`].

use crate::Rational;

/// Selects one stored component of a [`Rational`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The numerator (the "top" of the fraction).
    Numerator,
    /// The denominator.
    Denominator,
}

impl Field {
    /// Maps a tag to a component: `"top"` is the numerator, anything else
    /// the denominator.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "top" {
            Field::Numerator
        } else {
            Field::Denominator
        }
    }
}

impl Rational {
    /// Returns a shared reference to the selected component.
    #[must_use]
    pub fn field(&self, field: Field) -> &i64 {
        match field {
            Field::Numerator => &self.numerator,
            Field::Denominator => &self.denominator,
        }
    }

    /// Returns a mutable reference to the selected component.
    ///
    /// Nothing is checked or reduced after the write: storing a zero
    /// denominator or a non-reduced pair is allowed. A non-reduced value
    /// still compares equal to its reduced form but hashes differently, so
    /// call [`Rational::canonicalize`] before using it as a map key.
    pub fn field_mut(&mut self, field: Field) -> &mut i64 {
        match field {
            Field::Numerator => &mut self.numerator,
            Field::Denominator => &mut self.denominator,
        }
    }

    /// Shorthand for `field_mut(Field::Numerator)`.
    pub fn numerator_mut(&mut self) -> &mut i64 {
        self.field_mut(Field::Numerator)
    }

    /// Shorthand for `field_mut(Field::Denominator)`.
    pub fn denominator_mut(&mut self) -> &mut i64 {
        self.field_mut(Field::Denominator)
    }
}
