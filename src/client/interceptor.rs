//! Outbound request interception.
//!
//! Every request passes through exactly one interceptor before it is sent.
//! An interceptor may annotate the request or refuse it; a refused request
//! never reaches the network.

use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Request;
use uuid::Uuid;

use crate::client::error::ApiError;

/// Header carrying the per-call correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// A step applied to every outgoing request.
pub trait RequestInterceptor: Send + Sync + std::fmt::Debug {
    /// Return the (possibly modified) request, or refuse it.
    fn intercept(&self, request: Request) -> Result<Request, ApiError>;
}

/// Sends requests unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl RequestInterceptor for PassThrough {
    fn intercept(&self, request: Request) -> Result<Request, ApiError> {
        Ok(request)
    }
}

/// Attaches `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

// Never print the token.
impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken").finish_non_exhaustive()
    }
}

impl RequestInterceptor for BearerToken {
    fn intercept(&self, mut request: Request) -> Result<Request, ApiError> {
        if self.token.trim().is_empty() {
            return Err(ApiError::Interceptor("bearer token is empty".into()));
        }
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ApiError::Interceptor("bearer token is not a valid header value".into()))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(request)
    }
}

/// Stamps a UUID v4 `x-request-id` on requests that do not carry one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdStamp;

impl RequestInterceptor for RequestIdStamp {
    fn intercept(&self, mut request: Request) -> Result<Request, ApiError> {
        if !request.headers().contains_key(&X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            let value = HeaderValue::from_str(&id)
                .map_err(|e| ApiError::Interceptor(e.to_string()))?;
            request.headers_mut().insert(X_REQUEST_ID, value);
        }
        Ok(request)
    }
}
