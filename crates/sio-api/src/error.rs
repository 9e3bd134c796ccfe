//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the SoundItOut backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error, or a body that did not match the expected type.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the bearer token (or none was sent).
    #[error("unauthorized: log in again with `sio session login`")]
    Unauthorized,

    /// The token is valid but lacks the role this endpoint requires.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// A success response that is missing what the caller needs.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request was rejected before being sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
