//! Errors raised by interval construction and the numeric toolbox.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Interval bounds are inverted: lo = {lo}, hi = {hi}.")]
    InvalidBounds { lo: i32, hi: i32 },

    #[error("Intervals {a} and {b} cannot be united without filler cells.")]
    NotUnionable { a: String, b: String },

    #[error("The divisor of a floor modulo must not be zero.")]
    ZeroDivisor,

    #[error("The scan step must be strictly positive and finite, got {0}.")]
    InvalidStep(f64),

    #[error("The bisection tolerance must be strictly positive and finite, got {0}.")]
    InvalidTolerance(f64),

    #[error("Malformed bracket [{lower}, {upper}].")]
    MalformedBracket { lower: f64, upper: f64 },

    #[error("The function does not change sign over [{lower}, {upper}].")]
    NoSignChange { lower: f64, upper: f64 },

    #[error("No sign change found scanning [{lower}, {upper}] with step {step}.")]
    NoRootFound { lower: f64, upper: f64, step: f64 },
}
