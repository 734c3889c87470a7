//! Parsing of the JSON share document.
//!
//! ```text
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   ...
//! }
//! ```
//!
//! Every top-level key other than `keys` is the x coordinate of a share whose
//! y is `value` read in `base`.

use std::str::FromStr;

use log::{debug, warn};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde_json::{Map, Value};

use crate::digits;
use crate::error::SolveError;
use crate::interpolate::Point;

const KEYS_FIELD: &str = "keys";

/// A decoded request: `required` of the `points` determine the polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub required: usize,
    pub declared: usize,
    /// Sorted by x ascending.
    pub points: Vec<Point>,
}

fn integer_of(value: &Value) -> Option<BigInt> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .map(BigInt::from)
            .or_else(|| number.as_u64().map(BigInt::from)),
        Value::String(text) => BigInt::from_str(text.trim()).ok(),
        _ => None,
    }
}

fn count_field(keys: &Map<String, Value>, name: &str) -> Result<usize, SolveError> {
    let path = format!("{}.{}", KEYS_FIELD, name);
    let raw = keys
        .get(name)
        .ok_or_else(|| SolveError::MissingField(path.clone()))?;
    let value = integer_of(raw).ok_or_else(|| SolveError::MissingField(path.clone()))?;
    match value.to_usize() {
        Some(count) if count >= 1 => Ok(count),
        _ => Err(SolveError::InvalidCount {
            field: path,
            value: value.to_string(),
        }),
    }
}

fn base_of(raw: &Value) -> Result<u32, SolveError> {
    let base = match raw {
        Value::Number(number) => number.as_u64().and_then(|b| u32::try_from(b).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };
    let rendered = match raw {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    base.ok_or(SolveError::InvalidBase(rendered))
}

fn decode_share(key: &str, share: &Value) -> Result<Point, SolveError> {
    let x: i64 = key
        .trim()
        .parse()
        .map_err(|_| SolveError::InvalidPointKey(key.to_string()))?;

    let fields = share
        .as_object()
        .ok_or_else(|| SolveError::MissingField(format!("{}.base", key)))?;
    let raw_base = fields
        .get("base")
        .ok_or_else(|| SolveError::MissingField(format!("{}.base", key)))?;
    let digits = match fields.get("value") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) if number.is_u64() => number.to_string(),
        _ => return Err(SolveError::MissingField(format!("{}.value", key))),
    };

    let y = base_of(raw_base)
        .and_then(|base| digits::decode(&digits, base))
        .map_err(|err| err.at_point(key))?;
    Ok(Point { x, y })
}

/// Validate the counts and decode every share.
pub fn parse_dataset(json: &str) -> Result<Dataset, SolveError> {
    let root: Map<String, Value> =
        serde_json::from_str(json).map_err(|err| SolveError::InvalidInput(err.to_string()))?;

    let keys = root
        .get(KEYS_FIELD)
        .and_then(Value::as_object)
        .ok_or_else(|| SolveError::MissingField(KEYS_FIELD.to_string()))?;
    let declared = count_field(keys, "n")?;
    let required = count_field(keys, "k")?;
    if required > declared {
        warn!("dataset declares k = {} greater than n = {}", required, declared);
    }

    let mut points = root
        .iter()
        .filter(|(key, _)| key.as_str() != KEYS_FIELD)
        .map(|(key, share)| decode_share(key, share))
        .collect::<Result<Vec<_>, _>>()?;
    points.sort_by_key(|point| point.x);

    if points.len() != declared {
        warn!(
            "dataset declares n = {} but supplies {} points; using all supplied points",
            declared,
            points.len()
        );
    }
    debug!("decoded {} points, k = {}", points.len(), required);

    Ok(Dataset {
        required,
        declared,
        points,
    })
}
