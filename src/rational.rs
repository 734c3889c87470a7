//! Exact fractions over arbitrary-precision integers.

use std::fmt;
use std::ops::Add;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::SolveError;

/// A reduced fraction. The denominator is always positive and shares no
/// factor with the numerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

/// `gcd(0, x) = |x|`, and `gcd(0, 0) = 1` so that reducing a zero fraction
/// never divides by zero.
fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let divisor = a.gcd(b);
    if divisor.is_zero() {
        BigInt::one()
    } else {
        divisor
    }
}

impl Rational {
    /// Returns `None` when `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        Some(Self::reduced(numerator, denominator))
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn from_integer(value: BigInt) -> Self {
        Rational {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        let divisor = gcd(&numerator, &denominator);
        let mut numerator = numerator / &divisor;
        let mut denominator = denominator / &divisor;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Rational {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    pub fn to_integer(&self) -> Result<BigInt, SolveError> {
        if !self.is_integer() {
            return Err(SolveError::NonIntegerResult {
                numerator: self.numerator.clone(),
                denominator: self.denominator.clone(),
            });
        }
        Ok(&self.numerator / &self.denominator)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        let numerator = &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator;
        let denominator = &self.denominator * &rhs.denominator;
        Rational::reduced(numerator, denominator)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        &self + &rhs
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
