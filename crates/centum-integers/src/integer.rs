//! Arbitrary precision integers.
//!
//! An [`Integer`] stores its magnitude as base-100 digit slots, least
//! significant first, plus a sign flag. Every value is kept canonical:
//! no zero slot at the high end, and zero is the empty slot sequence with a
//! non-negative sign. Operations never mutate their operands and always
//! return a freshly normalized value.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{ArithmeticError, Result};
use crate::magnitude;
use crate::{Digit, BASE};

/// An arbitrary precision signed integer.
///
/// Equality and hashing are structural, which is sound because the
/// representation of every value is unique.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    negative: bool,
    digits: Vec<Digit>,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_unsigned(value < 0, u128::from(value.unsigned_abs()))
    }

    /// Creates an integer from a sign and base-100 digit slots,
    /// least significant first.
    ///
    /// High-order zero slots are dropped, and an all-zero magnitude yields
    /// zero whatever sign was requested.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidDigit`] if any slot is not below 100.
    pub fn from_digits(negative: bool, digits: Vec<Digit>) -> Result<Self> {
        if let Some((index, &value)) = digits
            .iter()
            .enumerate()
            .find(|(_, &d)| u16::from(d) >= BASE)
        {
            log::debug!("rejecting digit slot {index} with value {value}");
            return Err(ArithmeticError::InvalidDigit { index, value });
        }

        Ok(Self::from_parts(negative, digits))
    }

    /// Builds a normalized value from already validated slots.
    fn from_parts(negative: bool, digits: Vec<Digit>) -> Self {
        let mut n = Self { negative, digits };
        n.normalize();
        n
    }

    /// Decomposes an unsigned magnitude by repeated division by the base.
    fn from_unsigned(negative: bool, mut magnitude: u128) -> Self {
        let mut digits = Vec::new();
        while magnitude > 0 {
            digits.push((magnitude % u128::from(BASE)) as Digit);
            magnitude /= u128::from(BASE);
        }
        Self::from_parts(negative, digits)
    }

    /// Drops high-order zero slots and collapses zero to its canonical form.
    fn normalize(&mut self) {
        magnitude::trim(&mut self.digits);
        if self.digits.is_empty() {
            self.negative = false;
        }
    }

    /// Returns the digit slots, least significant first.
    ///
    /// Zero has no slots.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.digits.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.digits.iter().rev().try_fold(0i128, |acc, &d| {
            acc.checked_mul(i128::from(BASE))?.checked_add(i128::from(d))
        })?;
        let value = if self.negative { -magnitude } else { magnitude };
        i64::try_from(value).ok()
    }

    /// Computes self^exp by repeated multiplication.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::one(), |acc, _| &acc * self)
    }

    /// Signed addition over borrowed operands.
    fn add_signed(&self, rhs: &Self) -> Self {
        if self.negative == rhs.negative {
            return Self::from_parts(self.negative, magnitude::add(&self.digits, &rhs.digits));
        }

        match magnitude::compare(&self.digits, &rhs.digits) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_parts(self.negative, magnitude::sub(&self.digits, &rhs.digits))
            }
            Ordering::Less => {
                Self::from_parts(rhs.negative, magnitude::sub(&rhs.digits, &self.digits))
            }
        }
    }

    fn mul_signed(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        Self::from_parts(
            self.negative != rhs.negative,
            magnitude::mul(&self.digits, &rhs.digits),
        )
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self {
            negative: false,
            digits: vec![1],
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.digits == [1]
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => magnitude::compare(&self.digits, &other.digits),
            // Both negative: the larger magnitude is the smaller value.
            (true, true) => magnitude::compare(&other.digits, &self.digits),
        }
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((most, rest)) = self.digits.split_last() else {
            return f.write_str("0");
        };

        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{most}")?;
        for d in rest.iter().rev() {
            write!(f, "{d:02}")?;
        }
        Ok(())
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_signed(&rhs)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        self.add_signed(rhs)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_signed(rhs)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_signed(&-rhs)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        self.add_signed(&-rhs)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_signed(&-rhs)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_signed(&rhs)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        self.mul_signed(rhs)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_signed(rhs)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.digits.is_empty() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Sum for Integer {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Integer> for Integer {
    fn sum<I: Iterator<Item = &'a Integer>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for Integer {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Integer> for Integer {
    fn product<I: Iterator<Item = &'a Integer>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self::from_unsigned(false, u128::from(value))
    }
}

impl From<i128> for Integer {
    fn from(value: i128) -> Self {
        Self::from_unsigned(value < 0, value.unsigned_abs())
    }
}

impl From<u128> for Integer {
    fn from(value: u128) -> Self {
        Self::from_unsigned(false, value)
    }
}
