//! Failure kinds for a single solve call.
//!
//! Every kind is terminal: the pipeline stops at the first one and hands it
//! back with enough context to find the offending key, point or character.

use num_bigint::BigInt;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("input is not a dataset object: {0}")]
    InvalidInput(String),

    #[error("field `{0}` is missing or not an integer")]
    MissingField(String),

    #[error("field `{field}` must be a positive integer, got {value}")]
    InvalidCount { field: String, value: String },

    #[error("point key `{0}` is not an integer")]
    InvalidPointKey(String),

    #[error("base {0} is outside the supported range 2..=62")]
    InvalidBase(String),

    #[error("digit string is empty")]
    EmptyValue,

    #[error("character {ch:?} at position {position} is not a digit (expected 0-9, a-z or A-Z)")]
    InvalidDigit { ch: char, position: usize },

    #[error("digit {ch:?} at position {position} has value {value}, which is not below base {base}")]
    DigitOutOfRange {
        ch: char,
        position: usize,
        value: u32,
        base: u32,
    },

    #[error("{required} points are required, but only {available} were supplied")]
    InsufficientPoints { required: usize, available: usize },

    #[error("x = {0} appears more than once among the interpolation points")]
    DuplicateAbscissa(i64),

    #[error("interpolated value {numerator}/{denominator} is not a whole number")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },

    #[error("point ({x}, {expected}) is not on the interpolated polynomial, which gives {actual} at x = {x}")]
    VerificationFailed {
        x: i64,
        expected: BigInt,
        actual: String,
    },

    #[error("point `{key}`: {source}")]
    Point {
        key: String,
        #[source]
        source: Box<SolveError>,
    },
}

impl SolveError {
    /// Stable machine-readable name of the failure.
    ///
    /// Errors annotated with a point key report the kind of the error they wrap.
    pub fn kind(&self) -> &'static str {
        match self {
            SolveError::InvalidInput(_) => "InvalidInput",
            SolveError::MissingField(_) => "MissingField",
            SolveError::InvalidCount { .. } => "InvalidCount",
            SolveError::InvalidPointKey(_) => "InvalidPointKey",
            SolveError::InvalidBase(_) => "InvalidBase",
            SolveError::EmptyValue => "EmptyValue",
            SolveError::InvalidDigit { .. } => "InvalidDigit",
            SolveError::DigitOutOfRange { .. } => "DigitOutOfRange",
            SolveError::InsufficientPoints { .. } => "InsufficientPoints",
            SolveError::DuplicateAbscissa(_) => "DuplicateAbscissa",
            SolveError::NonIntegerResult { .. } => "NonIntegerResult",
            SolveError::VerificationFailed { .. } => "VerificationFailed",
            SolveError::Point { source, .. } => source.kind(),
        }
    }

    /// Attach the key of the point being processed.
    pub fn at_point(self, key: &str) -> SolveError {
        SolveError::Point {
            key: key.to_string(),
            source: Box::new(self),
        }
    }
}

/// Serializable `{kind, message}` view of an error, handed to hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
}

impl From<&SolveError> for ErrorReport {
    fn from(err: &SolveError) -> Self {
        ErrorReport {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
