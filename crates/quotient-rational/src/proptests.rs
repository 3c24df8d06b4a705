//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{gcd, Field, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d))
    }

    // Keeps three-term identities clear of i64 overflow
    fn tiny_rational() -> impl Strategy<Value = Rational> {
        (-50i64..50i64, 1i64..50i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn is_canonical(r: Rational) -> bool {
        r.denominator() > 0 && (r.denominator() == 1 || gcd(r.numerator().abs(), r.denominator()) == 1)
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_canonical(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d);
            prop_assert!(is_canonical(r));
            // same value as the raw pair
            prop_assert_eq!(r.numerator() * d, n * r.denominator());
        }

        #[test]
        fn operations_are_canonical(a in rational(), b in non_zero_rational(), k in non_zero_int()) {
            prop_assert!(is_canonical(a + b));
            prop_assert!(is_canonical(a - b));
            prop_assert!(is_canonical(a * b));
            prop_assert!(is_canonical(a / b));
            prop_assert!(is_canonical(a + k));
            prop_assert!(is_canonical(k - a));
            prop_assert!(is_canonical(a * k));
            prop_assert!(is_canonical(k / b));
            prop_assert!(is_canonical(-a));
        }

        #[test]
        fn setters_are_canonical(a in rational(), n in small_int(), d in non_zero_int()) {
            let mut x = a;
            x.set_numerator(n);
            prop_assert!(is_canonical(x));
            x.set_denominator(d);
            prop_assert!(is_canonical(x));
        }

        // Field axioms

        #[test]
        fn additive_identity(a in rational()) {
            prop_assert_eq!(a + Rational::zero(), a);
            prop_assert_eq!(a + 0, a);
        }

        #[test]
        fn multiplicative_identity(a in rational()) {
            prop_assert_eq!(a * Rational::one(), a);
            prop_assert_eq!(a * 1, a);
        }

        #[test]
        fn self_subtraction(a in rational()) {
            prop_assert!((a - a).is_zero());
        }

        #[test]
        fn self_division(a in non_zero_rational()) {
            prop_assert!((a / a).is_one());
        }

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn distributive(a in tiny_rational(), b in tiny_rational(), c in tiny_rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn multiplicative_inverse(a in non_zero_rational()) {
            prop_assert!((a * a.recip()).is_one());
        }

        #[test]
        fn negation_is_additive_inverse(a in rational()) {
            prop_assert!((a + -a).is_zero());
            prop_assert_eq!(a.pos(), a);
        }

        // Mixed operands agree with the lifted integer

        #[test]
        fn mixed_operands_match_lifted(a in rational(), k in small_int()) {
            let lifted = Rational::from(k);
            prop_assert_eq!(a + k, a + lifted);
            prop_assert_eq!(k + a, lifted + a);
            prop_assert_eq!(a - k, a - lifted);
            prop_assert_eq!(k - a, lifted - a);
            prop_assert_eq!(a * k, a * lifted);
            prop_assert_eq!(k * a, lifted * a);
            prop_assert_eq!(a == k, a == lifted);
            prop_assert_eq!(k < a, lifted < a);
            prop_assert_eq!(a < k, a < lifted);
            prop_assert_eq!(a <= k, a <= lifted);
            prop_assert_eq!(k >= a, lifted >= a);
        }

        #[test]
        fn mixed_add_is_order_independent(a in rational(), k in small_int()) {
            let left = a + k;
            let right = k + a;
            prop_assert_eq!(left.numerator(), right.numerator());
            prop_assert_eq!(left.denominator(), right.denominator());
        }

        #[test]
        fn mixed_division_matches_lifted(a in non_zero_rational(), k in non_zero_int()) {
            let lifted = Rational::from(k);
            prop_assert_eq!(a / k, a / lifted);
            prop_assert_eq!(k / a, lifted / a);
        }

        // Ordering

        #[test]
        fn trichotomy(a in rational(), b in rational()) {
            let count = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
            prop_assert_eq!(count, 1);
        }

        #[test]
        fn le_is_not_gt(a in rational(), b in rational(), k in small_int()) {
            prop_assert_eq!(a <= b, !(a > b));
            prop_assert_eq!(a >= b, !(a < b));
            prop_assert_eq!(a <= k, !(a > k));
            prop_assert_eq!(k >= a, !(k < a));
        }

        #[test]
        fn equality_matches_components(a in rational(), b in rational()) {
            let same = a.numerator() == b.numerator() && a.denominator() == b.denominator();
            prop_assert_eq!(a == b, same);
        }

        // Increment and decrement

        #[test]
        fn post_increment_returns_prior(a in rational()) {
            let mut x = a;
            let prior = x.post_increment();
            prop_assert_eq!(prior, a);
            prop_assert_eq!(x, a + 1);
        }

        #[test]
        fn pre_decrement_returns_updated(a in rational()) {
            let mut x = a;
            let updated = *x.pre_decrement();
            prop_assert_eq!(updated, a - 1);
            prop_assert_eq!(x, updated);
        }

        // Raw access

        #[test]
        fn raw_write_is_not_canonicalized(a in rational(), n in small_int(), d in non_zero_int()) {
            let mut x = a;
            *x.field_mut(Field::from_tag("top")) = n;
            *x.field_mut(Field::from_tag("bottom")) = d;
            prop_assert_eq!(x.numerator(), n);
            prop_assert_eq!(x.denominator(), d);
        }
    }
}
