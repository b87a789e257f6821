//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{ArithmeticError, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for integers far outside the machine range, built from raw slots
    fn big_int() -> impl Strategy<Value = Integer> {
        (any::<bool>(), prop::collection::vec(0u8..100u8, 0..24))
            .prop_map(|(negative, digits)| Integer::from_digits(negative, digits).unwrap())
    }

    proptest! {
        // Representation

        #[test]
        fn zero_is_canonical(negative in any::<bool>(), len in 0usize..8) {
            let z = Integer::from_digits(negative, vec![0; len]).unwrap();
            prop_assert!(z.is_zero());
            prop_assert!(!z.is_negative());
            prop_assert!(z.digits().is_empty());
        }

        #[test]
        fn no_high_order_zero_slot(a in big_int()) {
            prop_assert_ne!(a.digits().last(), Some(&0));
        }

        #[test]
        fn out_of_range_slot_rejected(
            prefix in prop::collection::vec(0u8..100u8, 0..6),
            bad in 100u8..=255u8
        ) {
            let index = prefix.len();
            let mut digits = prefix;
            digits.push(bad);
            prop_assert_eq!(
                Integer::from_digits(false, digits),
                Err(ArithmeticError::InvalidDigit { index, value: bad })
            );
        }

        #[test]
        fn native_round_trip(a in any::<i64>()) {
            prop_assert_eq!(Integer::new(a).to_i64(), Some(a));
            prop_assert_eq!(Integer::new(a).to_string(), a.to_string());
        }

        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a.clone() + (b.clone() + c.clone())
            );
        }

        #[test]
        fn integer_mul_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn integer_mul_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a.clone() * (b.clone() * c.clone())
            );
        }

        #[test]
        fn integer_distributive(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_identities(a in big_int()) {
            let zero = Integer::zero();
            let one = Integer::one();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&a * &one, a.clone());

            let product = &a * &zero;
            prop_assert!(product.is_zero());
            prop_assert!(!product.is_negative());
        }

        #[test]
        fn integer_additive_inverse(a in big_int()) {
            let sum = &a + &-&a;
            prop_assert_eq!(sum, Integer::zero());
        }

        #[test]
        fn integer_sub_is_add_negation(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a - &b, &a + &-&b);
        }

        #[test]
        fn integer_double_negation(a in big_int()) {
            prop_assert_eq!(-(-a.clone()), a);
        }

        #[test]
        fn integer_matches_native(a in small_int(), b in small_int()) {
            let x = Integer::new(a);
            let y = Integer::new(b);
            prop_assert_eq!((&x + &y).to_i64(), Some(a + b));
            prop_assert_eq!((&x - &y).to_i64(), Some(a - b));
            prop_assert_eq!((&x * &y).to_i64(), Some(a * b));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn integer_total_order(a in big_int(), b in big_int()) {
            let holds = [a < b, a == b, a > b];
            prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        }

        #[test]
        fn integer_order_agrees_with_difference(a in big_int(), b in big_int()) {
            let diff = &a - &b;
            prop_assert_eq!(a.cmp(&b), diff.signum().cmp(&0));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            let c = Rational::from_i64(num_c, den_c).unwrap();
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn rational_multiplicative_inverse(
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den).unwrap();
            let inv = a.recip().unwrap();
            let product = a * inv;
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_division_undoes_multiplication(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in non_zero_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
        }

        #[test]
        fn rational_scaled_parts_are_equal(
            num in small_int(),
            den in non_zero_int(),
            k in non_zero_int()
        ) {
            let a = Rational::from_i64(num, den).unwrap();
            let scaled = Rational::from_i64(num * k, den * k).unwrap();
            prop_assert_eq!(a, scaled);
        }

        #[test]
        fn rational_denominator_positive(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            prop_assert_eq!(a.denominator().signum(), 1);
            if num == 0 {
                prop_assert!(a.denominator().is_one());
            }
        }

        #[test]
        fn rational_zero_denominator_rejected(num in small_int()) {
            prop_assert_eq!(
                Rational::from_i64(num, 0).unwrap_err(),
                ArithmeticError::ZeroDenominator
            );
        }

        #[test]
        fn rational_order_matches_native(
            num_a in small_int(),
            den_a in 1i64..1000i64,
            num_b in small_int(),
            den_b in 1i64..1000i64
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(a.cmp(&b), (num_a * den_b).cmp(&(num_b * den_a)));
        }
    }
}
