//! Exact rational numbers.
//!
//! A [`Rational`] is a pair of [`Integer`]s kept with a positive denominator,
//! and with denominator one whenever the numerator is zero. Fractions are
//! not reduced to lowest terms, so `2/4` and `1/2` keep their own parts;
//! equality and ordering compare by cross-multiplication and treat them as
//! the same value.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{ArithmeticError, Result};
use crate::Integer;

/// An exact rational number with arbitrary precision parts.
#[derive(Clone)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// A negative denominator moves its sign to the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::ZeroDenominator`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            log::debug!("rejecting rational {numerator}/0");
            return Err(ArithmeticError::ZeroDenominator);
        }
        Ok(Self::from_parts(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::ZeroDenominator`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    /// Normalizes a pair whose denominator is known to be nonzero.
    fn from_parts(numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(!denominator.is_zero());

        let mut r = Self {
            numerator,
            denominator,
        };
        if r.denominator.is_negative() {
            r.numerator = -r.numerator;
            r.denominator = -r.denominator;
        }
        if r.numerator.is_zero() {
            r.denominator = Integer::one();
        }
        r
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator. It is always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::ZeroDenominator`] if the rational is zero.
    pub fn recip(&self) -> Result<Self> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Divides by `rhs`: `(a/b) / (c/d) = (a*d) / (b*c)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::ZeroDenominator`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.numerator.is_zero() {
            log::debug!("rejecting division of {self} by zero");
            return Err(ArithmeticError::ZeroDenominator);
        }
        Ok(Self::from_parts(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    fn add_impl(&self, rhs: &Self) -> Self {
        Self::from_parts(
            &self.numerator * &rhs.denominator + &self.denominator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn sub_impl(&self, rhs: &Self) -> Self {
        Self::from_parts(
            &self.numerator * &rhs.denominator - &self.denominator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn mul_impl(&self, rhs: &Self) -> Self {
        Self::from_parts(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &self.denominator * &other.numerator
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross-multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_impl(&rhs)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        self.add_impl(rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_impl(rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_impl(&rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        self.sub_impl(rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_impl(rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_impl(&rhs)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        self.mul_impl(rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_impl(rhs)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.numerator, self.denominator)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational::from_parts(-&self.numerator, self.denominator.clone())
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
