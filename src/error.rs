use thiserror::Error;

/// Failures reported by parsing, arithmetic and shape checks. Each message
/// names the operand, index or text at fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LfError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("division by zero: {0}")]
    DivisionByZero(String),
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, LfError>;
