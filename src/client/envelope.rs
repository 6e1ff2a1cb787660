//! The response envelope every backend reply is wrapped in.
//!
//! ```text
//! { "code": <integer>, "message": <string, optional>, "data": <any> }
//! ```
//!
//! Any JSON object is accepted as an envelope. A missing or non-integer
//! `code` is simply not the success sentinel.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::error::{ApiError, FALLBACK_MESSAGE};

/// Envelope code that marks a logically successful response.
pub const SUCCESS_CODE: i64 = 200;

/// Outer wrapper of every API response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Envelope<T = Value> {
    /// Kept as raw JSON; only the integer 200 counts as success.
    pub code: Option<Value>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The code, when it is an integer.
    pub fn code(&self) -> Option<i64> {
        self.code.as_ref().and_then(Value::as_i64)
    }

    /// True when the code equals the success sentinel.
    pub fn is_success(&self) -> bool {
        self.code() == Some(SUCCESS_CODE)
    }

    /// Discard the wrapper, keeping only the payload on success.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.is_success() {
            return Ok(self.data);
        }
        let code = self.code();
        let message = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        Err(ApiError::Logical { code, message })
    }
}

/// Parse a raw body and unwrap it into the caller's payload type.
///
/// The code is checked before the payload is typed, so a failure envelope
/// whose `data` has an unexpected shape still reports the logical failure.
pub fn unwrap_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let envelope: Envelope<Value> =
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let payload = envelope.into_result()?.unwrap_or(Value::Null);
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
