//! # BigInteger
//! Arbitrary-precision signed integers in sign-magnitude form.
//! The magnitude is a sequence of base-10000 limbs, least significant first.
//! # Example
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "10000000000000".into();
//! let b: BigInteger = "900000000000".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use crate::big_integer_cache::*;
use crate::big_integer_constants::*;
use crate::error::BigIntegerError;

macro_rules! ok_or_panic {
    ($result: expr) => {
        match $result {
            Ok(val) => val,
            Err(err) => panic!("{}", err),
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct BigInteger {
    /// Base-10000 limbs, index 0 least significant, no trailing zero limbs.
    digits: Vec<u32>,
    /// Always `false` when `digits` is empty, so zero has one representation.
    is_negative: bool,
}

// construction
impl BigInteger {
    /// Returns zero, the empty magnitude.
    pub fn new() -> Self {
        BigInteger { digits: Vec::new(), is_negative: false }
    }

    /// Builds a value straight from its parts.
    ///
    /// # Safety
    /// The caller must uphold the representation invariants: every limb in
    /// `[0, BASE)`, no trailing zero limbs, `is_negative == false` when
    /// `digits` is empty.
    pub(crate) unsafe fn from_raw(digits: Vec<u32>, is_negative: bool) -> Self {
        BigInteger { digits, is_negative }
    }

    fn from_magnitude(mut value: u128, is_negative: bool) -> Self {
        if value == 0 {
            return BigInteger::new();
        }
        if value <= MAX_CONSTANT as u128 {
            return if is_negative {
                NEG_CACHE[value as usize].clone()
            } else {
                POS_CACHE[value as usize].clone()
            };
        }
        let mut digits = Vec::new();
        while value > 0 {
            digits.push((value % BASE as u128) as u32);
            value /= BASE as u128;
        }
        BigInteger { digits, is_negative }
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::from_magnitude(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            BigInteger::from_magnitude((val as i128).unsigned_abs(), val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_integer!(i8, i16, i32, isize, i64, i128);

// parsing
impl FromStr for BigInteger {
    type Err = BigIntegerError;

    /// Parses an optional single leading `+`/`-` followed by one or more
    /// ASCII decimal digits. Digits are consumed from the least significant
    /// end in groups of [`BASE_DIGITS`] to build the limbs.
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let bytes = val.as_bytes();
        let (is_negative, start) = match bytes.first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            Some(_) => (false, 0),
            None => return Err(BigIntegerError::Empty),
        };

        let decimal = &bytes[start..];
        if decimal.is_empty() {
            return Err(BigIntegerError::Empty);
        }
        if let Some(&bad) = decimal.iter().find(|b| !b.is_ascii_digit()) {
            return Err(BigIntegerError::InvalidDigit { ch: bad as char });
        }

        let mut digits = Vec::with_capacity(decimal.len() / BASE_DIGITS + 1);
        for group in decimal.rchunks(BASE_DIGITS) {
            let mut limb: u32 = 0;
            for &b in group {
                limb = limb * 10 + (b - b'0') as u32;
                if limb >= BASE {
                    return Err(BigIntegerError::Overflow);
                }
            }
            digits.push(limb);
        }

        let mut result = BigInteger { digits, is_negative };
        result.normalize();
        Ok(result)
    }
}

impl From<&str> for BigInteger {
    fn from(val: &str) -> Self {
        ok_or_panic!(val.parse())
    }
}

// normalization and introspection
impl BigInteger {
    /// Restores the representation invariants: strips trailing zero limbs,
    /// then clears the sign when the magnitude became empty.
    fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.is_negative = false;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    pub fn abs(&self) -> BigInteger {
        BigInteger { digits: self.digits.clone(), is_negative: false }
    }

    /// Total decimal digit width of the value; `1` for zero.
    pub fn digit_count(&self) -> usize {
        match self.digits.last() {
            None => 1,
            Some(&top) => {
                let mut count = (self.digits.len() - 1) * BASE_DIGITS;
                let mut last = top;
                while last > 0 {
                    last /= 10;
                    count += 1;
                }
                count
            }
        }
    }
}

// comparison
impl BigInteger {
    fn compare_magnitude(&self, other: &BigInteger) -> Ordering {
        if self.digits.len() != other.digits.len() {
            return self.digits.len().cmp(&other.digits.len());
        }
        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative == other.is_negative && self.compare_magnitude(other).is_eq()
    }
}
impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative, other.is_negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.compare_magnitude(other),
            (true, true) => self.compare_magnitude(other).reverse(),
        }
    }
}

// negation
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> Self::Output {
        if !self.digits.is_empty() {
            self.is_negative = !self.is_negative;
        }
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// addition / subtraction
impl BigInteger {
    /// Returns `self + other`, reporting [`BigIntegerError::Overflow`] if a
    /// limb escapes `[0, BASE)` after carry correction.
    pub fn checked_add(&self, other: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        let mut result = self.clone();
        result.add_assign_checked(other)?;
        Ok(result)
    }

    /// Returns `self - other` under the same overflow contract as
    /// [`checked_add`](BigInteger::checked_add).
    pub fn checked_sub(&self, other: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        let mut result = self.clone();
        result.sub_assign_checked(other)?;
        Ok(result)
    }

    fn add_assign_checked(&mut self, other: &BigInteger) -> Result<(), BigIntegerError> {
        if other.is_zero() {
            return Ok(());
        }
        if self.is_zero() {
            *self = other.clone();
            return Ok(());
        }

        if self.is_negative != other.is_negative {
            // a + b with opposite signs is a - (-b)
            let negated = -other;
            return self.sub_assign_checked(&negated);
        }

        let mut carry: u32 = 0;
        let mut i = 0;
        while i < other.digits.len() || carry != 0 {
            if i == self.digits.len() {
                self.digits.push(0);
            }
            let mut limb = self.digits[i] + carry + other.digits.get(i).copied().unwrap_or(0);
            carry = 0;
            if limb >= BASE {
                limb -= BASE;
                carry = 1;
            }
            // hard invariant guard, unreachable when the wrap above is correct
            if limb >= BASE {
                return Err(BigIntegerError::Overflow);
            }
            self.digits[i] = limb;
            i += 1;
        }

        self.normalize();
        Ok(())
    }

    fn sub_assign_checked(&mut self, other: &BigInteger) -> Result<(), BigIntegerError> {
        if other.is_zero() {
            return Ok(());
        }
        if self.is_zero() {
            *self = -other;
            return Ok(());
        }

        if self.is_negative != other.is_negative {
            // a - b with opposite signs is a + (-b)
            let negated = -other;
            return self.add_assign_checked(&negated);
        }

        if self.compare_magnitude(other) != Ordering::Less {
            let mut borrow: i64 = 0;
            let mut i = 0;
            while i < other.digits.len() || borrow != 0 {
                if i == self.digits.len() {
                    self.digits.push(0);
                }
                let mut limb = self.digits[i] as i64
                    - borrow
                    - other.digits.get(i).copied().unwrap_or(0) as i64;
                borrow = 0;
                if limb < 0 {
                    limb += BASE as i64;
                    borrow = 1;
                }
                if limb < 0 || limb >= BASE as i64 {
                    return Err(BigIntegerError::Overflow);
                }
                self.digits[i] = limb as u32;
                i += 1;
            }
            self.normalize();
            Ok(())
        } else {
            // |a| < |b|: compute -(b - a) instead of running a borrow pass
            // that would go negative.
            let mut flipped = other.clone();
            flipped.sub_assign_checked(self)?;
            *self = -flipped;
            Ok(())
        }
    }
}

impl Add for BigInteger {
    type Output = BigInteger;

    fn add(mut self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.add_assign_checked(&rhs));
        self
    }
}

impl Add for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.checked_add(rhs))
    }
}

impl AddAssign for BigInteger {
    fn add_assign(&mut self, rhs: Self) {
        ok_or_panic!(self.add_assign_checked(&rhs));
    }
}

impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        ok_or_panic!(self.add_assign_checked(rhs));
    }
}

impl Sub for BigInteger {
    type Output = BigInteger;

    fn sub(mut self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.sub_assign_checked(&rhs));
        self
    }
}

impl Sub for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.checked_sub(rhs))
    }
}

impl SubAssign for BigInteger {
    fn sub_assign(&mut self, rhs: Self) {
        ok_or_panic!(self.sub_assign_checked(&rhs));
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        ok_or_panic!(self.sub_assign_checked(rhs));
    }
}

// multiplication
impl BigInteger {
    /// Schoolbook product of `self` and `other`. The result sign is the
    /// exclusive-or of the operand signs. Reports
    /// [`BigIntegerError::Overflow`] when the normalized product is wider
    /// than [`MAX_DECIMAL_DIGITS`] decimal digits.
    pub fn checked_mul(&self, other: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        let mut digits = vec![0u32; self.digits.len() + other.digits.len()];

        for (i, &a) in self.digits.iter().enumerate() {
            let mut carry: u64 = 0;
            let mut j = 0;
            while j < other.digits.len() || carry != 0 {
                let mut product =
                    a as u64 * other.digits.get(j).copied().unwrap_or(0) as u64 + carry;
                if let Some(slot) = digits.get_mut(i + j) {
                    product += *slot as u64;
                    *slot = (product % BASE as u64) as u32;
                }
                carry = product / BASE as u64;
                j += 1;
            }
        }

        let mut result = BigInteger {
            digits,
            is_negative: self.is_negative != other.is_negative,
        };
        result.normalize();

        if result.digit_count() > MAX_DECIMAL_DIGITS {
            return Err(BigIntegerError::Overflow);
        }
        Ok(result)
    }
}

impl Mul for BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.checked_mul(&rhs))
    }
}

impl Mul for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.checked_mul(rhs))
    }
}

impl MulAssign for BigInteger {
    fn mul_assign(&mut self, rhs: Self) {
        *self = ok_or_panic!(self.checked_mul(&rhs));
    }
}

impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        *self = ok_or_panic!(self.checked_mul(rhs));
    }
}

// division / modulo
impl BigInteger {
    /// Computes quotient and remainder in one long-division pass over the
    /// absolute values. Quotient sign is the exclusive-or of the operand
    /// signs; remainder sign follows the dividend (truncating division).
    ///
    /// Each quotient limb is the largest `d` in `[0, BASE)` with
    /// `|divisor| * d <= remainder`, found by binary search.
    pub fn div_rem(
        &self,
        divisor: &BigInteger,
    ) -> Result<(BigInteger, BigInteger), BigIntegerError> {
        if divisor.is_zero() {
            return Err(BigIntegerError::DivisionByZero);
        }

        let abs_dividend = self.abs();
        let abs_divisor = divisor.abs();

        let mut quotient = BigInteger {
            digits: vec![0u32; abs_dividend.digits.len()],
            is_negative: false,
        };
        let mut remainder = BigInteger::new();

        for i in (0..abs_dividend.digits.len()).rev() {
            // remainder = remainder * BASE + next limb
            remainder.digits.insert(0, abs_dividend.digits[i]);
            remainder.normalize();

            let mut left: u32 = 0;
            let mut right: u32 = BASE;
            let mut digit: u32 = 0;

            while left <= right {
                let mid = (left + right) / 2;
                let candidate = abs_divisor.checked_mul(&BigInteger::from(mid))?;
                if candidate <= remainder {
                    digit = mid;
                    left = mid + 1;
                } else {
                    // mid is never 0 here: divisor * 0 <= remainder always holds
                    right = mid - 1;
                }
            }

            quotient.digits[i] = digit;
            let product = abs_divisor.checked_mul(&BigInteger::from(digit))?;
            remainder.sub_assign_checked(&product)?;
        }

        quotient.is_negative = self.is_negative != divisor.is_negative;
        remainder.is_negative = self.is_negative;
        quotient.normalize();
        remainder.normalize();

        Ok((quotient, remainder))
    }

    /// Quotient half of [`div_rem`](BigInteger::div_rem).
    pub fn checked_div(&self, divisor: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// Remainder half of [`div_rem`](BigInteger::div_rem).
    pub fn checked_rem(&self, divisor: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        Ok(self.div_rem(divisor)?.1)
    }
}

impl Div for BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.checked_div(&rhs))
    }
}

impl Div for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.checked_div(rhs))
    }
}

impl DivAssign for BigInteger {
    fn div_assign(&mut self, rhs: Self) {
        *self = ok_or_panic!(self.checked_div(&rhs));
    }
}

impl DivAssign<&BigInteger> for BigInteger {
    fn div_assign(&mut self, rhs: &BigInteger) {
        *self = ok_or_panic!(self.checked_div(rhs));
    }
}

impl Rem for BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.checked_rem(&rhs))
    }
}

impl Rem for &BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: Self) -> Self::Output {
        ok_or_panic!(self.checked_rem(rhs))
    }
}

impl RemAssign for BigInteger {
    fn rem_assign(&mut self, rhs: Self) {
        *self = ok_or_panic!(self.checked_rem(&rhs));
    }
}

impl RemAssign<&BigInteger> for BigInteger {
    fn rem_assign(&mut self, rhs: &BigInteger) {
        *self = ok_or_panic!(self.checked_rem(rhs));
    }
}

// increment / decrement
impl BigInteger {
    /// Adds one in place, the prefix `++` of the operator set.
    pub fn increment(&mut self) -> &mut Self {
        ok_or_panic!(self.add_assign_checked(&POS_CACHE[1]));
        self
    }

    /// Subtracts one in place, the prefix `--` of the operator set.
    pub fn decrement(&mut self) -> &mut Self {
        ok_or_panic!(self.sub_assign_checked(&POS_CACHE[1]));
        self
    }
}

// boolean conversion: true iff non-zero
impl From<&BigInteger> for bool {
    fn from(val: &BigInteger) -> bool {
        !val.is_zero()
    }
}

impl From<BigInteger> for bool {
    fn from(val: BigInteger) -> bool {
        !val.is_zero()
    }
}

// formatting
impl Display for BigInteger {
    /// Sign if negative, top limb without padding, every further limb
    /// zero-padded to the limb width. Zero is `"0"` with no sign.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative {
            f.write_str("-")?;
        }
        match self.digits.split_last() {
            None => f.write_str("0"),
            Some((&top, lower)) => {
                write!(f, "{}", top)?;
                for &limb in lower.iter().rev() {
                    write!(f, "{:04}", limb)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
fn pow_of_ten(zeros: usize) -> BigInteger {
    format!("1{}", "0".repeat(zeros)).parse().unwrap()
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big: BigInteger = num.into();
    assert_eq!(big.to_string(), "12");

    let num: i16 = -100;
    let big: BigInteger = num.into();
    assert_eq!(big.to_string(), "-100");

    let num: i32 = -123456789;
    let big: BigInteger = num.into();
    assert_eq!(big.digits, vec![6789, 2345, 1]);
    assert!(big.is_negative);

    let num: u64 = 10000;
    let big: BigInteger = num.into();
    assert_eq!(big.digits, vec![0, 1]);

    let num: i64 = 0;
    let big: BigInteger = num.into();
    assert!(big.is_zero());
    assert!(!big.is_negative());

    let big: BigInteger = i128::MIN.into();
    assert_eq!(big.to_string(), "-170141183460469231731687303715884105728");
}

#[test]
fn test_parse() {
    let a: BigInteger = "123456789".parse().unwrap();
    assert_eq!(a.digits, vec![6789, 2345, 1]);
    assert!(!a.is_negative);

    let b: BigInteger = "+123".parse().unwrap();
    assert_eq!(b, BigInteger::from(123));

    let c: BigInteger = "-000123".parse().unwrap();
    assert_eq!(c, BigInteger::from(-123));

    let zero: BigInteger = "-0".parse().unwrap();
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero, BigInteger::from(0));

    assert_eq!("".parse::<BigInteger>(), Err(BigIntegerError::Empty));
    assert_eq!("-".parse::<BigInteger>(), Err(BigIntegerError::Empty));
    assert_eq!("+".parse::<BigInteger>(), Err(BigIntegerError::Empty));
    assert_eq!(
        "12a3".parse::<BigInteger>(),
        Err(BigIntegerError::InvalidDigit { ch: 'a' })
    );
    assert_eq!(
        "+-12".parse::<BigInteger>(),
        Err(BigIntegerError::InvalidDigit { ch: '-' })
    );
}

#[test]
fn test_add() {
    let a = BigInteger::from(123);
    let b = BigInteger::from(877);
    assert_eq!(&a + &b, BigInteger::from(1000));

    // carry across every limb
    let a: BigInteger = "999999999999999999".into();
    assert_eq!(a + BigInteger::from(1), "1000000000000000000".into());

    // mixed signs redirect to subtraction
    assert_eq!(BigInteger::from(10) + BigInteger::from(-3), BigInteger::from(7));
    assert_eq!(BigInteger::from(-10) + BigInteger::from(3), BigInteger::from(-7));
    assert_eq!(BigInteger::from(-10) + BigInteger::from(-3), BigInteger::from(-13));

    // zero operands
    assert_eq!(BigInteger::from(-5) + BigInteger::new(), BigInteger::from(-5));
    assert_eq!(BigInteger::new() + BigInteger::from(-5), BigInteger::from(-5));

    let mut c = BigInteger::from(1);
    c += BigInteger::from(2);
    c += &BigInteger::from(3);
    assert_eq!(c, BigInteger::from(6));
}

#[test]
fn test_sub() {
    assert_eq!(BigInteger::from(1000) - BigInteger::from(1), "999".into());

    // |a| < |b| flips to -(b - a)
    assert_eq!(BigInteger::from(3) - BigInteger::from(10), BigInteger::from(-7));
    assert_eq!(BigInteger::from(-3) - BigInteger::from(-10), BigInteger::from(7));

    // mixed signs redirect to addition
    assert_eq!(BigInteger::from(3) - BigInteger::from(-10), BigInteger::from(13));
    assert_eq!(BigInteger::from(-3) - BigInteger::from(10), BigInteger::from(-13));

    // borrow across every limb
    let a: BigInteger = "1000000000000000000".into();
    assert_eq!(a - BigInteger::from(1), "999999999999999999".into());

    let a = BigInteger::from(12345);
    assert_eq!(&a - &a, BigInteger::new());

    let mut b = BigInteger::from(10);
    b -= BigInteger::from(4);
    b -= &BigInteger::from(6);
    assert!(b.is_zero());
}

#[test]
fn test_mul() {
    let a: BigInteger = "12345678901234567890".into();
    let b: BigInteger = "98765432109876543210".into();
    let product: BigInteger = "1219326311370217952237463801111263526900".into();
    assert_eq!(&a * &b, product);
    assert_eq!(&b * &a, product);

    assert_eq!(BigInteger::from(-4) * BigInteger::from(25), BigInteger::from(-100));
    assert_eq!(BigInteger::from(-4) * BigInteger::from(-25), BigInteger::from(100));

    let zero = BigInteger::from(-7) * BigInteger::new();
    assert!(zero.is_zero());
    assert!(!zero.is_negative());

    let mut c = BigInteger::from(3);
    c *= BigInteger::from(7);
    c *= &BigInteger::from(2);
    assert_eq!(c, BigInteger::from(42));
}

#[test]
fn test_mul_overflow_ceiling() {
    // 10^15004 * 10^15003 has 30008 digits and fits
    let a = pow_of_ten(15004);
    let b = pow_of_ten(15003);
    let product = a.checked_mul(&b).unwrap();
    assert_eq!(product.digit_count(), 30008);

    // 10^15005 * 10^15004 has 30010 digits and does not
    let a = pow_of_ten(15005);
    let b = pow_of_ten(15004);
    assert_eq!(a.checked_mul(&b), Err(BigIntegerError::Overflow));
}

#[test]
fn test_div() {
    assert_eq!(BigInteger::from(1000) / BigInteger::from(7), BigInteger::from(142));
    assert_eq!(BigInteger::from(7) / BigInteger::from(1000), BigInteger::new());

    // truncation toward zero
    assert_eq!(BigInteger::from(-7) / BigInteger::from(2), BigInteger::from(-3));
    assert_eq!(BigInteger::from(7) / BigInteger::from(-2), BigInteger::from(-3));
    assert_eq!(BigInteger::from(-7) / BigInteger::from(-2), BigInteger::from(3));

    let a: BigInteger = "10000000000000".into();
    let b: BigInteger = "900000000000".into();
    assert_eq!(&a / &b, BigInteger::from(11));

    let mut c: BigInteger = "123456789123456789".into();
    c /= BigInteger::from(1000);
    assert_eq!(c, "123456789123456".into());
}

#[test]
fn test_mod() {
    assert_eq!(BigInteger::from(1000) % BigInteger::from(7), BigInteger::from(6));

    // remainder sign follows the dividend
    assert_eq!(BigInteger::from(-7) % BigInteger::from(2), BigInteger::from(-1));
    assert_eq!(BigInteger::from(7) % BigInteger::from(-2), BigInteger::from(1));
    assert_eq!(BigInteger::from(-7) % BigInteger::from(-2), BigInteger::from(-1));

    let a: BigInteger = "10000000000000".into();
    let b: BigInteger = "900000000000".into();
    assert_eq!(&a % &b, "100000000000".into());

    let mut c = BigInteger::from(12345);
    c %= BigInteger::from(100);
    assert_eq!(c, BigInteger::from(45));
}

#[test]
fn test_div_rem() {
    let (q, r) = BigInteger::from(1000).div_rem(&BigInteger::from(7)).unwrap();
    assert_eq!(q, BigInteger::from(142));
    assert_eq!(r, BigInteger::from(6));

    // exact division leaves an unsigned zero remainder
    let (q, r) = BigInteger::from(-100).div_rem(&BigInteger::from(10)).unwrap();
    assert_eq!(q, BigInteger::from(-10));
    assert!(r.is_zero());
    assert!(!r.is_negative());
}

#[test]
fn test_division_by_zero() {
    let a = BigInteger::from(42);
    let zero: BigInteger = "-0".into();
    assert_eq!(a.checked_div(&zero), Err(BigIntegerError::DivisionByZero));
    assert_eq!(a.checked_rem(&zero), Err(BigIntegerError::DivisionByZero));
    assert_eq!(
        BigInteger::new().div_rem(&BigInteger::new()),
        Err(BigIntegerError::DivisionByZero)
    );
}

#[test]
fn test_cmp() {
    let neg_big: BigInteger = "-100000000".into();
    let neg_small = BigInteger::from(-1);
    let zero = BigInteger::new();
    let pos_small = BigInteger::from(1);
    let pos_big: BigInteger = "100000000".into();

    assert!(neg_big < neg_small);
    assert!(neg_small < zero);
    assert!(zero < pos_small);
    assert!(pos_small < pos_big);
    assert!(pos_big > neg_big);

    assert_eq!(zero, BigInteger::from("-0"));
    assert_ne!(pos_small, neg_small);
    assert!(BigInteger::from(9999) < BigInteger::from(10000));
}

#[test]
fn test_neg_and_abs() {
    let a = BigInteger::from(5);
    assert_eq!(-(-(&a)), a);
    assert_eq!(&(-&a) + &a, BigInteger::new());

    let zero = -BigInteger::new();
    assert!(!zero.is_negative());

    assert_eq!(BigInteger::from(-42).abs(), BigInteger::from(42));
    assert_eq!(BigInteger::from(42).abs(), BigInteger::from(42));
}

#[test]
fn test_increment_decrement() {
    let mut a = BigInteger::from(-1);
    a.increment();
    assert!(a.is_zero());
    a.increment();
    assert_eq!(a, BigInteger::from(1));
    a.decrement();
    a.decrement();
    assert_eq!(a, BigInteger::from(-1));

    let mut b: BigInteger = "9999".into();
    b.increment();
    assert_eq!(b, "10000".into());
}

#[test]
fn test_bool_conversion() {
    assert!(!bool::from(BigInteger::new()));
    assert!(bool::from(BigInteger::from(-3)));
    assert!(bool::from(&BigInteger::from(1)));
    assert!(!bool::from(&BigInteger::from("-0")));
}

#[test]
fn test_digit_count() {
    assert_eq!(BigInteger::new().digit_count(), 1);
    assert_eq!(BigInteger::from(7).digit_count(), 1);
    assert_eq!(BigInteger::from(9999).digit_count(), 4);
    assert_eq!(BigInteger::from(10000).digit_count(), 5);
    assert_eq!(BigInteger::from(-12345678).digit_count(), 8);
    assert_eq!(pow_of_ten(100).digit_count(), 101);
}

#[test]
fn test_to_string() {
    assert_eq!(BigInteger::new().to_string(), "0");
    assert_eq!(BigInteger::from(-42).to_string(), "-42");

    // inner limbs keep their zero padding
    let a: BigInteger = "10000002000030".into();
    assert_eq!(a.to_string(), "10000002000030");

    let b: BigInteger = "-90000000000000000001".into();
    assert_eq!(b.to_string(), "-90000000000000000001");

    // "-0" normalizes away its sign
    let zero: BigInteger = "-0".into();
    assert_eq!(zero.to_string(), "0");
}

#[cfg(test)]
mod props {
    use {super::*, proptest::proptest};

    proptest! {
        #[test]
        fn add_then_sub_round_trips(a: i128, b: i128) {
            let x = BigInteger::from(a);
            let y = BigInteger::from(b);
            assert_eq!(&(&x + &y) - &y, x);
            assert_eq!(&(&x - &y) + &y, x);
        }

        #[test]
        fn negation_laws(a: i128) {
            let x = BigInteger::from(a);
            assert_eq!(&x + &(-&x), BigInteger::new());
            assert_eq!(-(-&x), x);
        }

        #[test]
        fn truncating_division_law(a: i128, b: i128) {
            if b != 0 {
                let x = BigInteger::from(a);
                let y = BigInteger::from(b);
                let (q, r) = x.div_rem(&y).unwrap();
                assert_eq!(&(&q * &y) + &r, x);
                assert!(r.abs() < y.abs());
                if !r.is_zero() {
                    assert_eq!(r.is_negative(), x.is_negative());
                }
            }
        }

        #[test]
        fn parse_format_round_trips(s in "-?[1-9][0-9]{0,80}") {
            let value: BigInteger = s.parse().unwrap();
            assert_eq!(value.to_string(), s);
        }

        #[test]
        fn ordering_is_total(a: i128, b: i128) {
            let x = BigInteger::from(a);
            let y = BigInteger::from(b);
            assert_eq!(x.cmp(&y), a.cmp(&b));
            let trichotomy =
                [x < y, x == y, y < x].iter().filter(|&&held| held).count();
            assert_eq!(trichotomy, 1);
        }

        #[test]
        fn multiplication_matches_native(a: i64, b: i64) {
            let x = BigInteger::from(a);
            let y = BigInteger::from(b);
            assert_eq!(&x * &y, BigInteger::from(a as i128 * b as i128));
        }
    }
}
