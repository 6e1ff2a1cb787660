//! Failure taxonomy for calls made through the facade.

use thiserror::Error;

/// Message used when a failure carries no usable text of its own.
pub const FALLBACK_MESSAGE: &str = "request failed";

/// Errors that can occur while issuing an API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network failure or a non-2xx HTTP status.
    #[error("{message}")]
    Transport {
        message: String,
        /// HTTP status, when the server answered at all.
        status: Option<u16>,
    },

    /// No complete response within the configured timeout.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u64 },

    /// The transport succeeded but the envelope code was not the success sentinel.
    #[error("{message}")]
    Logical {
        /// Envelope code, when it was an integer at all.
        code: Option<i64>,
        message: String,
    },

    /// The outbound interceptor refused the request; nothing was sent.
    #[error("request interceptor failed: {0}")]
    Interceptor(String),

    /// The body was not an envelope, or the payload did not fit the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// A local precondition failed before any request was built.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// The string published to the notification sink for this failure.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Whether this failure is surfaced to the user.
    ///
    /// Failures raised before a transport was attempted are only returned
    /// to the caller.
    pub fn is_notified(&self) -> bool {
        !matches!(self, ApiError::Interceptor(_) | ApiError::InvalidArgument(_))
    }

    /// HTTP status associated with the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Logical { .. } => "logical",
            ApiError::Interceptor(_) => "interceptor",
            ApiError::Decode(_) => "decode",
            ApiError::InvalidArgument(_) => "invalid_argument",
        }
    }

    pub(crate) fn from_status(status: u16) -> Self {
        ApiError::Transport {
            message: format!("Request failed with status code {}", status),
            status: Some(status),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout { timeout_ms };
        }
        let status = err.status().map(|s| s.as_u16());
        let message = err.to_string();
        ApiError::Transport {
            message: if message.is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
            status,
        }
    }
}
