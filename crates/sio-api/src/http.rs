//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so endpoint modules stay focused on request
//! construction and response mapping.

use crate::error::ApiError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **401** -> [`ApiError::Unauthorized`]
/// - **403** -> [`ApiError::Forbidden`] with the response body
/// - **Other non-success** -> [`ApiError::Api`] with status and body
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let message = resp.text().await.unwrap_or_default();
    if status == reqwest::StatusCode::FORBIDDEN {
        return Err(ApiError::Forbidden(message));
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}
