//! Network error type

use thiserror::Error;

/// Failure of one platform call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out (30s)")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx status; `message` is the body's `error` field when the
    /// platform supplied one, otherwise a per-operation fallback
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_reqwest(e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Connect(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}
