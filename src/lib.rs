//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers kept in base `10^9` limbs,
//!   for values that outgrow the native integer types (large factorials and the like).
//!
//! Supported operations are construction from primitive integers and decimal
//! text, `+`, `-`, `*` (with their compound and `i64` forms), negation,
//! increment/decrement, the full comparison set and decimal rendering.
//!
//! ```
//! use big_integer::BigInt;
//!
//! let mut n = BigInt::from(1);
//! let mut factorial = BigInt::from(1);
//! while n <= 20i64 {
//!     factorial *= &n;
//!     n.increment();
//! }
//! assert_eq!(factorial.to_string(), "2432902008176640000");
//! ```

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
#[cfg(feature = "serde")]
mod big_int_serde;

pub use big_int::{BigInt, Sign};
pub use error::{ParseBigIntError, Result};

#[cfg(test)]
mod tests {
    use crate::{BigInt, Sign};

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn it_works() {
        let a = big("10000000000000");
        let b = big("900000000000");
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&b - &a).to_string(), "-9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
    }

    #[test]
    fn limb_carry_and_borrow() {
        assert_eq!(big("999999999") + big("1"), big("1000000000"));
        assert_eq!(big("1000000000") - big("1"), big("999999999"));
        assert_eq!(big("1000000000000000000") - big("1"), big("999999999999999999"));
    }

    #[test]
    fn mixed_sign_addition() {
        assert_eq!(big("-5") + big("3"), big("-2"));
        assert_eq!(big("5") + big("-3"), big("2"));
        assert_eq!(big("-3") + big("5"), big("2"));
        assert_eq!(big("3") + big("-5"), big("-2"));
        assert_eq!(big("-3") - big("-5"), big("2"));
        assert_eq!(big("3") - big("5"), big("-2"));

        let zero = big("-7") + big("7");
        assert_eq!(zero.sign(), Sign::Positive);
        assert_eq!(zero.limbs(), &[0]);
    }

    #[test]
    fn multiplication() {
        assert_eq!(big("123456789123456789") * big("2"), big("246913578246913578"));
        assert_eq!(big("-123456789123456789") * 2i64, big("-246913578246913578"));

        let zero = big("-123456789123456789") * big("0");
        assert_eq!(zero.sign(), Sign::Positive);
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn factorial_chain() {
        let mut factorial = BigInt::from(1);
        let mut table = vec![factorial.clone()];
        for i in 1..=20 {
            factorial = factorial * BigInt::from(i);
            table.push(factorial.clone());
        }
        assert_eq!(table[1], big("1"));
        assert_eq!(table[5], big("120"));
        assert_eq!(table[20].to_string(), "2432902008176640000");

        let product: BigInt = (1..=20u32).map(BigInt::from).product();
        assert_eq!(product, table[20]);
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(big("-0"), big("0"));
        assert_eq!(big("-0").to_string(), "0");
        assert_eq!(big("0").to_string(), "0");
        assert_eq!((-big("0")).sign(), Sign::Positive);
    }

    #[test]
    fn native_operands() {
        let mut a = big("1000000000");
        a += 5i64;
        assert_eq!(a, 1_000_000_005i64);
        a -= 2_000_000_005i64;
        assert_eq!(a, -1_000_000_000i64);
        a *= -3i64;
        assert!(a > 2_999_999_999i64);
        assert!(a >= 3_000_000_000i64);
        assert!(a < 3_000_000_001i64);
        assert_eq!(&a - 1i64, big("2999999999"));
    }

    #[test]
    fn sum_of_values() {
        let values = vec![big("999999999"), big("1"), big("-1000000000"), big("42")];
        let total: BigInt = values.iter().sum();
        assert_eq!(total, 42i64);
        let total: BigInt = values.into_iter().sum();
        assert_eq!(total, 42i64);
    }

    #[test]
    fn default_is_zero() {
        let zero = BigInt::default();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(zero, BigInt::zero());
        assert_eq!(big("-12").abs(), big("12"));
    }
}
