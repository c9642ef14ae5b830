use thiserror::Error;

pub type CsResult<T> = Result<T, CsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Shape mismatch: {what} has {len} elements, expected 1 or {expected}")]
    ShapeMismatch {
        what: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("Value outside physical domain for {what}: {value}")]
    Domain { what: &'static str, value: f64 },
}
