//! Lagrange evaluation over exact rationals.
//!
//! The interpolating polynomial is never expanded into coefficients; each
//! basis term is evaluated directly at the target x and folded into a
//! running reduced sum.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::One;
use serde::{Serialize, Serializer};

use crate::error::SolveError;
use crate::rational::Rational;

/// A decoded share: `y = P(x)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i64,
    #[serde(serialize_with = "serialize_decimal")]
    pub y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Point { x, y: y.into() }
    }
}

/// Big integers go over the wire as decimal strings.
pub(crate) fn serialize_decimal<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Fails with `DuplicateAbscissa` on the first x seen twice.
pub fn ensure_distinct(points: &[Point]) -> Result<(), SolveError> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(point.x) {
            return Err(SolveError::DuplicateAbscissa(point.x));
        }
    }
    Ok(())
}

// y_i * prod_{j != i} (target - x_j) / (x_i - x_j), reduced.
fn lagrange_term(i: usize, target: &BigInt, points: &[Point]) -> Result<Rational, SolveError> {
    let xi = BigInt::from(points[i].x);
    let mut numerator = points[i].y.clone();
    let mut denominator = BigInt::one();
    for (j, other) in points.iter().enumerate() {
        if j == i {
            continue;
        }
        let xj = BigInt::from(other.x);
        numerator *= target - &xj;
        denominator *= &xi - &xj;
    }
    Rational::new(numerator, denominator).ok_or(SolveError::DuplicateAbscissa(points[i].x))
}

/// Exact value at `target_x` of the unique polynomial of degree < `points.len()`
/// through `points`.
pub fn evaluate_exact(target_x: i64, points: &[Point]) -> Result<Rational, SolveError> {
    if points.is_empty() {
        return Err(SolveError::InsufficientPoints {
            required: 1,
            available: 0,
        });
    }
    ensure_distinct(points)?;

    let target = BigInt::from(target_x);
    let mut sum = Rational::zero();
    for i in 0..points.len() {
        let term = lagrange_term(i, &target, points)?;
        sum = &sum + &term;
    }
    Ok(sum)
}

/// Like [`evaluate_exact`], but the value must be a whole number.
pub fn evaluate(target_x: i64, points: &[Point]) -> Result<BigInt, SolveError> {
    evaluate_exact(target_x, points)?.to_integer()
}

/// `P(0)`.
pub fn constant_term(points: &[Point]) -> Result<BigInt, SolveError> {
    evaluate(0, points)
}
