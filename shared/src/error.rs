//! Error types for the shared crate

use thiserror::Error;

/// Errors raised while parsing wire values into models
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An option id inside a delimited option string is not an integer
    #[error("Invalid option id: {0:?}")]
    InvalidOptionId(String),

    /// Table numbers must not be blank
    #[error("Table number is empty")]
    EmptyTableNumber,

    /// Unknown table location
    #[error("Unknown table location: {0}")]
    UnknownLocation(String),

    /// Unknown order status
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}

/// Result type for model parsing
pub type ModelResult<T> = Result<T, ModelError>;
