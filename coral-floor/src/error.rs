//! Floor controller error types

use coral_client::ClientError;
use thiserror::Error;

/// Errors surfaced by controller operations
///
/// Every variant is logged at the [`crate::FloorController::dispatch`]
/// boundary; none of them abort the controller.
#[derive(Debug, Error)]
pub enum FloorError {
    #[error("No table selected")]
    NoTableSelected,

    #[error("No category selected")]
    NoCategorySelected,

    #[error("No product selected")]
    NoProductSelected,

    #[error("Unknown order line: {0}")]
    UnknownOrderLine(i64),

    #[error("Unknown product: {0}")]
    UnknownProduct(i64),

    #[error("No print ticket staged")]
    NothingStaged,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FloorError {
    /// Text to show or log for a failed request, preferring the server's own message
    pub fn server_message(&self) -> Option<String> {
        match self {
            FloorError::Client(e) => e.server_message(),
            _ => None,
        }
    }
}

pub type FloorResult<T> = Result<T, FloorError>;
