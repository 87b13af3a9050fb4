//! # BigInt
//! Arbitrary-precision signed integers stored in sign-magnitude form.
//! The magnitude is a sequence of base `10^9` limbs, least-significant first,
//! so decimal text converts to and from limbs by plain digit grouping.
//!
//! Every value is kept canonical:
//! - the magnitude has at least one limb and no most-significant zero limb,
//! - every limb lies in `[0, 10^9)`,
//! - zero is always `Sign::Positive` with magnitude `[0]`.
//!
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "123456789123456789".parse().unwrap();
//! let b = BigInt::from(-2);
//! assert_eq!((&a * &b).to_string(), "-246913578246913578");
//! assert_eq!((&a + &b).to_string(), "123456789123456787");
//! assert!(b < a);
//! ```

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{ParseBigIntError, Result};

// 去掉高位的 0 limb, 至少保留一个 limb
macro_rules! trim_leading_zero {
    ($vec: expr) => {
        {
            let mut v = $vec;
            while v.len() > 1 && v.last() == Some(&0) {
                v.pop();
            }
            v
        }
    };
}

/// Sign of a [`BigInt`]. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BigInt {
    sign: Sign,
    mag: Vec<u32>,
}

// 杂项辅助函数
impl BigInt {
    pub fn zero() -> BigInt {
        ZERO.clone()
    }
    pub fn one() -> BigInt {
        ONE.clone()
    }
    pub fn sign(&self) -> Sign {
        self.sign
    }
    /// The magnitude as base `10^9` limbs, least-significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
    pub fn abs(&self) -> BigInt {
        BigInt::new(self.mag.clone(), Sign::Positive)
    }

    fn is_canonical(&self) -> bool {
        let Some(&top) = self.mag.last() else {
            return false;
        };
        if self.mag.len() > 1 && top == 0 {
            return false;
        }
        if self.sign == Sign::Negative && self.is_zero() {
            return false;
        }
        self.mag.iter().all(|&limb| limb < BASE)
    }
}

// 实现构造
impl BigInt {
    pub(crate) fn new(mag: Vec<u32>, sign: Sign) -> Self {
        let val = BigInt { sign, mag };
        debug_assert!(val.is_canonical(), "non canonical BigInt: {:?}", val);
        val
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.mag_to_string())
    }
}

impl BigInt {
    /// Decimal digits of the magnitude. The top limb is written as is,
    /// every lower limb is padded to `DIGITS_PER_LIMB` digits.
    fn mag_to_string(&self) -> String {
        let mut result = String::with_capacity(self.mag.len() * DIGITS_PER_LIMB);
        let mut limbs = self.mag.iter().rev();
        if let Some(top) = limbs.next() {
            result.push_str(&top.to_string());
        }
        for limb in limbs {
            result.push_str(&format!("{:0width$}", limb, width = DIGITS_PER_LIMB));
        }
        result
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(val: &str) -> Result<Self> {
        BigInt::from_decimal_str(val)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = ParseBigIntError;

    fn try_from(val: &str) -> Result<Self> {
        BigInt::from_decimal_str(val)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                BigInt::value_of(val.unsigned_abs() as u128, Sign::Negative)
            } else {
                BigInt::value_of(val as u128, Sign::Positive)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

impl BigInt {
    fn value_of(mut val: u128, sign: Sign) -> BigInt {
        if val == 0 {
            return BigInt::zero();
        }
        if val <= MAX_CONSTANT as u128 {
            return match sign {
                Sign::Positive => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            };
        }
        // u128::MAX has 39 decimal digits, five limbs at most
        let mut mag = Vec::with_capacity(5);
        while val != 0 {
            mag.push((val % BASE as u128) as u32);
            val /= BASE as u128;
        }
        BigInt::new(mag, sign)
    }

    /// Parses an optional `+`/`-` followed by decimal digits.
    /// An empty digit run, or one made only of zeros, is zero.
    fn from_decimal_str(val: &str) -> Result<BigInt> {
        log::trace!("parsing BigInt from {} bytes", val.len());
        let bytes = val.as_bytes();
        let (sign, mut cursor) = match bytes.first() {
            Some(b'-') => (Sign::Negative, 1),
            Some(b'+') => (Sign::Positive, 1),
            _ => (Sign::Positive, 0),
        };

        if let Some((offset, found)) = val[cursor..]
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            let err = ParseBigIntError::InvalidDigit { position: cursor + offset, found };
            log::debug!("rejected BigInt literal: {}", err);
            return Err(err);
        }

        // skip leading zero
        while cursor < bytes.len() && bytes[cursor] == b'0' {
            cursor += 1;
        }
        if cursor == bytes.len() {
            return Ok(BigInt::zero());
        }

        // groups are cut from the least-significant end, so only the
        // most-significant group may be short
        let digits = &bytes[cursor..];
        let mag: Vec<u32> = digits
            .rchunks(DIGITS_PER_LIMB)
            .map(|group| group.iter().fold(0u32, |acc, d| acc * 10 + (d - b'0') as u32))
            .collect();

        log::trace!("parsed {} digits into {} limbs", digits.len(), mag.len());
        Ok(BigInt::new(mag, sign))
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        // no leading zero limbs, so the longer magnitude is the larger one
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => BigInt::compare_mag(&self.mag, &other.mag),
            (Sign::Negative, Sign::Negative) => BigInt::compare_mag(&self.mag, &other.mag).reverse(),
        }
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        self.cmp(&BigInt::from(*other)).is_eq()
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&BigInt::from(*other)))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // canonical form makes equal values structurally identical
        self.sign.hash(state);
        self.mag.hash(state);
    }
}

// 二元运算符的转发: 所有权/引用/i64 组合都落到 `&BigInt op &BigInt`
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                <&BigInt as $imp<&BigInt>>::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                <&BigInt as $imp<&BigInt>>::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                <&BigInt as $imp<&BigInt>>::$method(self, &rhs)
            }
        }

        impl $imp<i64> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i64) -> Self::Output {
                <&BigInt as $imp<&BigInt>>::$method(&self, &BigInt::from(rhs))
            }
        }

        impl $imp<i64> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i64) -> Self::Output {
                <&BigInt as $imp<&BigInt>>::$method(self, &BigInt::from(rhs))
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = <&BigInt as $imp<&BigInt>>::$method(self, &rhs);
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = <&BigInt as $imp<&BigInt>>::$method(self, rhs);
            }
        }

        impl $assign_imp<i64> for BigInt {
            fn $assign_method(&mut self, rhs: i64) {
                *self = <&BigInt as $imp<&BigInt>>::$method(self, &BigInt::from(rhs));
            }
        }
    };
}

// 实现加法
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, val: &BigInt) -> Self::Output {
        self.add_signed(val.sign, &val.mag)
    }
}
forward_binop!(Add, add, AddAssign, add_assign);

impl BigInt {
    /// `self + (sign, mag)`. Subtraction passes the flipped sign of its operand.
    fn add_signed(&self, sign: Sign, mag: &[u32]) -> BigInt {
        if self.sign == sign {
            return BigInt::new(BigInt::add(&self.mag, mag), sign);
        }

        // signs differ: the larger magnitude decides the sign, a tie is zero
        match BigInt::compare_mag(&self.mag, mag) {
            Ordering::Less => BigInt::new(BigInt::sub(mag, &self.mag), sign),
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::new(BigInt::sub(&self.mag, mag), self.sign),
        }
    }

    fn add(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let base = BASE as u64;

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry: u64 = 0;
        for (index, &limb) in long.iter().enumerate() {
            let sum = limb as u64 + short.get(index).map_or(0, |&l| l as u64) + carry;
            result.push((sum % base) as u32);
            carry = sum / base;
        }

        if carry != 0 {
            result.push(carry as u32);
        }

        result
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        let BigInt { sign, mag } = self;
        BigInt::new(mag, -sign)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, val: &BigInt) -> Self::Output {
        self.add_signed(-val.sign, &val.mag)
    }
}
forward_binop!(Sub, sub, SubAssign, sub_assign);

impl BigInt {
    /// `big - little` on magnitudes. The caller guarantees `big >= little`.
    fn sub(big: &[u32], little: &[u32]) -> Vec<u32> {
        debug_assert!(BigInt::compare_mag(big, little).is_ge());
        let base = BASE as i64;

        let mut result = Vec::with_capacity(big.len());
        let mut borrow: i64 = 0;
        let mut last_non_zero = 0;
        for (index, &limb) in big.iter().enumerate() {
            let mut difference =
                limb as i64 + borrow - little.get(index).map_or(0, |&l| l as i64);
            if difference < 0 {
                difference += base;
                borrow = -1;
            } else {
                borrow = 0;
            }
            if difference != 0 {
                last_non_zero = index;
            }
            result.push(difference as u32);
        }
        debug_assert_eq!(borrow, 0);

        result.truncate(last_non_zero + 1);
        result
    }
}

// 实现乘法
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, val: &BigInt) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return BigInt::zero();
        }

        log::trace!("multiplying {} x {} limbs", self.mag.len(), val.mag.len());
        let sign = if self.sign == val.sign { Sign::Positive } else { Sign::Negative };
        let mag = BigInt::mul_to_len(&self.mag, &val.mag);
        BigInt::new(trim_leading_zero!(mag), sign)
    }
}
forward_binop!(Mul, mul, MulAssign, mul_assign);

impl BigInt {
    /// Schoolbook product into an `x.len() + y.len()` accumulator.
    /// Each step holds at most `(BASE-1)^2 + 2(BASE-1) < BASE^2`, which fits u64.
    fn mul_to_len(x: &[u32], y: &[u32]) -> Vec<u32> {
        let base = BASE as u64;
        let mut z = vec![0u32; x.len() + y.len()];

        for (y_index, &y_limb) in y.iter().enumerate() {
            let mut carry: u64 = 0;
            for (x_index, &x_limb) in x.iter().enumerate() {
                let z_index = x_index + y_index;
                let product = (x_limb as u64) * (y_limb as u64) + (z[z_index] as u64) + carry;
                z[z_index] = (product % base) as u32;
                carry = product / base;
            }
            // earlier rows never reach this slot
            z[y_index + x.len()] = carry as u32;
        }

        z
    }
}

// 实现自增自减
impl BigInt {
    /// Prefix increment, `++v`.
    pub fn increment(&mut self) -> &mut Self {
        *self += &*ONE;
        self
    }
    /// Prefix decrement, `--v`.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= &*ONE;
        self
    }
    /// Postfix increment, `v++`: returns the value held before the step.
    pub fn post_increment(&mut self) -> BigInt {
        let prev = self.clone();
        self.increment();
        prev
    }
    /// Postfix decrement, `v--`: returns the value held before the step.
    pub fn post_decrement(&mut self) -> BigInt {
        let prev = self.clone();
        self.decrement();
        prev
    }
}

// 实现求和与连乘
impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

#[test]
fn test_from() {
    let big: BigInt = 12i8.into();
    assert_eq!(big.mag, vec![12]);
    assert_eq!(big.sign, Sign::Positive);

    let big: BigInt = (-100i16).into();
    assert_eq!(big.mag, vec![100]);
    assert_eq!(big.sign, Sign::Negative);

    let big: BigInt = 1_234_567_890_123i64.into();
    assert_eq!(big.mag, vec![567_890_123, 1_234]);

    let big: BigInt = 0i32.into();
    assert_eq!(big.mag, vec![0]);
    assert_eq!(big.sign, Sign::Positive);

    let big: BigInt = i64::MIN.into();
    assert_eq!(big.to_string(), "-9223372036854775808");

    let big: BigInt = u128::MAX.into();
    assert_eq!(big.to_string(), u128::MAX.to_string());
    assert_eq!(big.mag.len(), 5);
}

#[test]
fn test_from_str() {
    let a: BigInt = "1234567890123".parse().unwrap();
    assert_eq!(a.mag, vec![567_890_123, 1_234]);

    let a: BigInt = "-000000000000000000042".parse().unwrap();
    assert_eq!(a.mag, vec![42]);
    assert_eq!(a.sign, Sign::Negative);

    let a: BigInt = "+999999999".parse().unwrap();
    assert_eq!(a.mag, vec![999_999_999]);

    for zero in ["", "+", "-", "0", "-0", "+000", "000000000000000000000"] {
        let a: BigInt = zero.parse().unwrap();
        assert_eq!(a.mag, vec![0], "input {:?}", zero);
        assert_eq!(a.sign, Sign::Positive, "input {:?}", zero);
    }
}

#[test]
fn test_from_str_invalid() {
    assert_eq!(
        "12a4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 2, found: 'a' })
    );
    assert_eq!(
        "-12-4".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 3, found: '-' })
    );
    assert_eq!(
        "+-1".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 1, found: '-' })
    );
    assert_eq!(
        " 1".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 0, found: ' ' })
    );
    assert_eq!(
        "1é".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit { position: 1, found: 'é' })
    );
    assert!(BigInt::try_from("1.5").unwrap_err().is_invalid_format());
}

#[test]
fn test_to_string() {
    let a = BigInt::new(vec![7, 0, 12], Sign::Negative);
    assert_eq!(a.to_string(), "-12000000000000000007");

    let a = BigInt::zero();
    assert_eq!(a.to_string(), "0");

    let s = "12345678909876523784950683472613487560983287654321";
    let a: BigInt = s.parse().unwrap();
    assert_eq!(a.to_string(), s);

    let a = BigInt::from(42);
    assert_eq!(format!("{:>6}", a), "    42");
    assert_eq!(format!("{:+}", a), "+42");
    assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
}

#[test]
fn test_compare_mag() {
    assert_eq!(BigInt::compare_mag(&[0, 1], &[999_999_999]), Ordering::Greater);
    assert_eq!(BigInt::compare_mag(&[5, 1], &[6, 1]), Ordering::Less);
    assert_eq!(BigInt::compare_mag(&[6, 1], &[5, 2]), Ordering::Less);
    assert_eq!(BigInt::compare_mag(&[3, 4, 5], &[3, 4, 5]), Ordering::Equal);
}

#[test]
fn test_cmp_mixed_sign() {
    let small_pos = BigInt::from(1);
    let big_neg: BigInt = "-1000000000000000000000".parse().unwrap();
    let small_neg = BigInt::from(-1);
    let big_pos: BigInt = "1000000000000000000000".parse().unwrap();

    assert!(big_neg < small_pos);
    assert!(small_neg > big_neg);
    assert!(small_neg < big_pos);
    assert!(big_pos > small_pos);
    assert!(BigInt::zero() > small_neg);
    assert!(small_pos >= 1i64);
    assert!(small_neg <= -1i64);
    assert!(big_neg < i64::MIN);
    assert!(big_pos != 0i64);
}

#[test]
fn test_add_mag() {
    assert_eq!(BigInt::add(&[999_999_999], &[1]), vec![0, 1]);
    assert_eq!(BigInt::add(&[1], &[999_999_999, 999_999_999]), vec![0, 0, 1]);
    assert_eq!(BigInt::add(&[0], &[0]), vec![0]);
}

#[test]
fn test_sub_mag() {
    assert_eq!(BigInt::sub(&[0, 1], &[1]), vec![999_999_999]);
    assert_eq!(BigInt::sub(&[5, 7, 9], &[5, 7, 9]), vec![0]);
    assert_eq!(BigInt::sub(&[0, 0, 1], &[1]), vec![999_999_999, 999_999_999]);
    assert_eq!(BigInt::sub(&[3, 2, 1], &[2, 2, 1]), vec![1]);
}

#[test]
fn test_mul_to_len() {
    let z = BigInt::mul_to_len(&[999_999_999, 999_999_999], &[999_999_999, 999_999_999]);
    let product: BigInt = "999999999999999998000000000000000001".parse().unwrap();
    assert_eq!(z, product.mag);

    let a: BigInt = "10000000000000000".parse().unwrap();
    let b: BigInt = "30000000000000000".parse().unwrap();
    let result: BigInt = "300000000000000000000000000000000".parse().unwrap();
    assert_eq!(a * b, result);
}

#[test]
fn test_mul_sign() {
    let a = BigInt::from(-3);
    let b = BigInt::from(7);
    assert_eq!(&a * &b, BigInt::from(-21));
    assert_eq!(&a * &a, BigInt::from(9));

    let zero = &a * &BigInt::zero();
    assert_eq!(zero.sign, Sign::Positive);
    assert_eq!(zero.mag, vec![0]);
}

#[test]
fn test_neg_zero() {
    let zero = -BigInt::zero();
    assert_eq!(zero.sign, Sign::Positive);
    assert!(zero.is_canonical());
    assert_eq!(-(-BigInt::from(5)), BigInt::from(5));
}

#[test]
fn test_increment() {
    let mut v = BigInt::from(-1);
    assert_eq!(*v.increment(), BigInt::zero());
    assert_eq!(v.sign, Sign::Positive);
    assert_eq!(v.post_decrement(), BigInt::zero());
    assert_eq!(v, BigInt::from(-1));

    let mut v: BigInt = "999999999".parse().unwrap();
    assert_eq!(v.post_increment().to_string(), "999999999");
    assert_eq!(v.to_string(), "1000000000");
    v.decrement();
    assert_eq!(v.to_string(), "999999999");
}
