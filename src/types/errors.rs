use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: Value is an empty string")]
    Empty,
    #[error("Amount error: {0}")]
    InvalidFormat(String)
}
