//! Arbitrary-precision signed integers over base-10 digits.
//!
//! Digits are stored least significant first, one decimal digit per element.
//! Two invariants hold for every value that leaves this module: the digit
//! vector is never empty and carries no most-significant zeros (zero itself is
//! the single digit 0), and zero is always non-negative. All operators return
//! new values; nothing mutates an operand in place.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use rand::Rng;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    negative: bool,
    digits: Vec<u8>,
}

impl BigInt {
    pub fn zero() -> BigInt {
        BigInt {
            negative: false,
            digits: vec![0],
        }
    }

    pub fn one() -> BigInt {
        BigInt {
            negative: false,
            digits: vec![1],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Sign-cleared copy.
    pub fn abs(&self) -> BigInt {
        BigInt {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// Truncating division. The quotient's sign is the xor of the operand
    /// signs; long division by repeated subtraction per digit position, at
    /// most 9 subtractions per digit since the base is 10.
    pub fn try_div(&self, other: &BigInt) -> Result<BigInt> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let divisor = other.abs();
        let ten = BigInt::from(10u64);
        let mut remainder = BigInt::zero();
        let mut quotient_digits = vec![0u8; self.digits.len()];
        for i in (0..self.digits.len()).rev() {
            remainder = remainder * &ten + BigInt::from(self.digits[i] as u64);
            let mut digit = 0u8;
            while remainder >= divisor {
                remainder = remainder - &divisor;
                digit += 1;
            }
            quotient_digits[i] = digit;
        }
        let mut quotient = BigInt {
            negative: self.negative != other.negative,
            digits: quotient_digits,
        };
        quotient.normalize();
        Ok(quotient)
    }

    /// Remainder defined as `self - (self / other) * other`, so its sign
    /// follows the dividend.
    pub fn try_rem(&self, other: &BigInt) -> Result<BigInt> {
        let quotient = self.try_div(other)?;
        Ok(self - quotient * other)
    }

    /// Iterative binary exponentiation, reducing modulo `modulus` at every
    /// multiplication so intermediates stay below `modulus^2`.
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        let one = BigInt::one();
        let two = BigInt::from(2u64);
        let zero = BigInt::zero();
        let mut result = BigInt::one();
        let mut base = self.try_rem(modulus)?;
        let mut exp = exponent.clone();
        while exp > zero {
            if exp.try_rem(&two)? == one {
                result = (result * &base).try_rem(modulus)?;
            }
            base = (&base * &base).try_rem(modulus)?;
            exp = exp.try_div(&two)?;
        }
        Ok(result)
    }

    /// Draws a value below `max` (which must be strictly positive), building
    /// the result digit by digit from the most significant end of `max`.
    ///
    /// While no digit strictly below the bound's digit has been drawn yet,
    /// digits are sampled from `[1, bound_digit]` (a zero bound digit forces a
    /// zero digit); afterwards they are uniform over `[0, 9]`. This keeps the
    /// historical sampling shape: 0 is never produced, `max` itself can be,
    /// and values shorter than `max` in digits are unreachable. Witness
    /// selection in the primality checker relies on this range.
    pub fn random_below(rng: &mut impl Rng, max: &BigInt) -> Result<BigInt> {
        if *max <= BigInt::zero() {
            return Err(Error::InvalidArgument);
        }
        let mut digits = Vec::with_capacity(max.digits.len());
        let mut below = false;
        for &bound_digit in max.digits.iter().rev() {
            let digit = if below {
                rng.gen_range(0..=9u8)
            } else if bound_digit == 0 {
                0
            } else {
                let d = rng.gen_range(1..=bound_digit);
                if d < bound_digit {
                    below = true;
                }
                d
            };
            digits.push(digit);
        }
        digits.reverse();
        let mut value = BigInt {
            negative: false,
            digits,
        };
        value.normalize();
        Ok(value)
    }

    /// Narrowing conversion. Negative values and values above `u64::MAX`
    /// do not fit.
    pub fn to_u64(&self) -> Result<u64> {
        if self.negative {
            return Err(Error::Overflow);
        }
        if *self > BigInt::from(u64::MAX) {
            return Err(Error::Overflow);
        }
        let mut result: u64 = 0;
        let mut multiplier: u64 = 1;
        for (i, &d) in self.digits.iter().enumerate() {
            result += d as u64 * multiplier;
            if i + 1 < self.digits.len() {
                // 10^19 fits in a u64, 10^20 does not
                multiplier *= 10;
            }
        }
        Ok(result)
    }
}

impl From<u64> for BigInt {
    fn from(mut value: u64) -> BigInt {
        let mut digits = Vec::new();
        loop {
            digits.push((value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        BigInt {
            negative: false,
            digits,
        }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> BigInt {
        let mut n = BigInt::from(value.unsigned_abs());
        if value < 0 {
            n.negative = true;
        }
        n
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(Error::InvalidFormat);
        }
        let mut digits = Vec::with_capacity(body.len());
        for c in body.chars().rev() {
            let d = c.to_digit(10).ok_or(Error::InvalidFormat)?;
            digits.push(d as u8);
        }
        let mut n = BigInt { negative, digits };
        n.normalize();
        Ok(n)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

fn cmp_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        if self.negative != other.negative {
            return if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        let magnitude = cmp_magnitude(&self.digits, &other.digits);
        if self.negative {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;
    let mut i = 0;
    while i < a.len() || i < b.len() || carry > 0 {
        let mut sum = carry;
        if i < a.len() {
            sum += a[i];
        }
        if i < b.len() {
            sum += b[i];
        }
        digits.push(sum % 10);
        carry = sum / 10;
        i += 1;
    }
    digits
}

// requires |a| >= |b|
fn sub_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(a.len());
    let mut borrow = 0i8;
    for i in 0..a.len() {
        let mut diff = a[i] as i8 - borrow;
        if i < b.len() {
            diff -= b[i] as i8;
        }
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        digits.push(diff as u8);
    }
    digits
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &'b BigInt) -> BigInt {
        if self.negative != other.negative {
            // differing signs: redirect to subtraction of magnitudes
            return if self.negative {
                other - &(-self)
            } else {
                self - &(-other)
            };
        }
        let mut result = BigInt {
            negative: self.negative,
            digits: add_magnitudes(&self.digits, &other.digits),
        };
        result.normalize();
        result
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &'b BigInt) -> BigInt {
        if self.negative != other.negative {
            return self + &(-other);
        }
        if cmp_magnitude(&self.digits, &other.digits) == Ordering::Less {
            // smaller magnitude minus larger: negate the reverse subtraction
            return -(other - self);
        }
        let mut result = BigInt {
            negative: self.negative,
            digits: sub_magnitudes(&self.digits, &other.digits),
        };
        result.normalize();
        result
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &'b BigInt) -> BigInt {
        let mut digits = vec![0u8; self.digits.len() + other.digits.len()];
        for (i, &d) in self.digits.iter().enumerate() {
            let mut carry = 0u32;
            let mut j = 0;
            while j < other.digits.len() || carry > 0 {
                let rhs = if j < other.digits.len() {
                    other.digits[j] as u32
                } else {
                    0
                };
                let product = digits[i + j] as u32 + d as u32 * rhs + carry;
                digits[i + j] = (product % 10) as u8;
                carry = product / 10;
                j += 1;
            }
        }
        let mut result = BigInt {
            negative: self.negative != other.negative,
            digits,
        };
        result.normalize();
        result
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut result = self.clone();
        if !result.is_zero() {
            result.negative = !result.negative;
        }
        result
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, other: BigInt) -> BigInt {
                $trait::$method(&self, &other)
            }
        }
        impl<'a> $trait<&'a BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, other: &'a BigInt) -> BigInt {
                $trait::$method(&self, other)
            }
        }
        impl<'a> $trait<BigInt> for &'a BigInt {
            type Output = BigInt;
            fn $method(self, other: BigInt) -> BigInt {
                $trait::$method(self, &other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
