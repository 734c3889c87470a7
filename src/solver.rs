//! Select, interpolate, verify.

use log::debug;
use num_bigint::BigInt;
use serde::Serialize;

use crate::dataset::{parse_dataset, Dataset};
use crate::error::SolveError;
use crate::interpolate::{constant_term, ensure_distinct, evaluate_exact, serialize_decimal, Point};
use crate::rational::Rational;

/// The recovered constant term and the points that determined it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    #[serde(serialize_with = "serialize_decimal")]
    pub constant_term: BigInt,
    pub selected_points: Vec<Point>,
}

/// The `required` points with the smallest x, in ascending x order.
///
/// This is a fixed policy rather than a search: if these points are
/// inconsistent with the rest, verification fails even when some other
/// subset would have agreed with every point.
pub fn select_points(dataset: &Dataset) -> Result<Vec<Point>, SolveError> {
    let required = dataset.required;
    if dataset.points.len() < required {
        return Err(SolveError::InsufficientPoints {
            required,
            available: dataset.points.len(),
        });
    }

    let mut ordered = dataset.points.clone();
    ordered.sort_by_key(|point| point.x);
    ordered.truncate(required);
    ensure_distinct(&ordered)?;
    Ok(ordered)
}

/// Every point in `points` must lie exactly on the polynomial through `selected`.
///
/// A point where that polynomial takes a fractional value is reported as
/// `VerificationFailed` naming the point, not as `NonIntegerResult`.
pub fn verify(selected: &[Point], points: &[Point]) -> Result<(), SolveError> {
    for point in points {
        let actual = evaluate_exact(point.x, selected)?;
        if actual != Rational::from_integer(point.y.clone()) {
            return Err(SolveError::VerificationFailed {
                x: point.x,
                expected: point.y.clone(),
                actual: actual.to_string(),
            });
        }
    }
    Ok(())
}

pub fn solve(dataset: &Dataset) -> Result<Solution, SolveError> {
    let selected = select_points(dataset)?;
    debug!(
        "selected x = {:?}",
        selected.iter().map(|point| point.x).collect::<Vec<_>>()
    );

    let constant = constant_term(&selected)?;
    debug!("constant term = {}", constant);

    verify(&selected, &dataset.points)?;
    debug!("verified against all {} points", dataset.points.len());

    Ok(Solution {
        constant_term: constant,
        selected_points: selected,
    })
}

/// Parse, decode and solve a JSON share document in one pass.
pub fn solve_json(json: &str) -> Result<Solution, SolveError> {
    solve(&parse_dataset(json)?)
}
