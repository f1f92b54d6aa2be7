//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Text the server supplied for the failure, if any
    ///
    /// Error bodies look like `{"error": "Order not found"}`; plain-text
    /// bodies are returned as-is.
    pub fn server_message(&self) -> Option<String> {
        let body = match self {
            ClientError::NotFound(b) | ClientError::Validation(b) => b,
            ClientError::Server { message, .. } => message,
            _ => return None,
        };

        let parsed = serde_json::from_str::<shared::models::MessageResponse>(body)
            .ok()
            .and_then(|r| r.error);
        match parsed {
            Some(text) => Some(text),
            None if body.trim().is_empty() => None,
            None => Some(body.trim().to_string()),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
