//! API Errors
//!
//! Outcome taxonomy for calls against the Product API.

use thiserror::Error;

/// Any call that did not end in a 2xx response
///
/// The controller treats every variant the same way; the kinds only make
/// log lines and the error banner readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Any status in [200, 300) counts as success
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

pub fn check_status(status: u16) -> ApiResult<()> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}
