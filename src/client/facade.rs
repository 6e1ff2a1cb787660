//! The API client facade.
//!
//! # Responsibilities
//! - Hold the base address and timeout every call shares
//! - Run the outbound interceptor before anything is sent
//! - Normalize every response into `Ok(payload)` or `Err(ApiError)`
//! - Publish exactly one notification per surfaced failure
//!
//! # Design Decisions
//! - Config is copied in at construction and never changes afterwards
//! - The timeout covers the whole call, headers and body
//! - No retries, caching or deduplication; each call stands alone

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;

use crate::client::envelope::unwrap_body;
use crate::client::error::{ApiError, ApiResult};
use crate::client::interceptor::{PassThrough, RequestInterceptor};
use crate::client::notify::{LogNotifier, Notifier};
use crate::config::ClientConfig;
use crate::observability::metrics;

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    config: ClientConfig,
    interceptor: Box<dyn RequestInterceptor>,
    notifier: Arc<dyn Notifier>,
    metrics_enabled: bool,
}

impl ApiClientBuilder {
    /// Replace the default pass-through interceptor.
    pub fn interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptor = Box::new(interceptor);
        self
    }

    /// Replace the default log-based notifier.
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Toggle request metrics.
    pub fn metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    /// Validate the base address and build the underlying HTTP client.
    pub fn build(self) -> ApiResult<ApiClient> {
        let base = Url::parse(&self.config.base_address).map_err(|e| ApiError::Transport {
            message: format!("invalid base address '{}': {}", self.config.base_address, e),
            status: None,
        })?;

        let timeout_duration = Duration::from_millis(self.config.timeout_ms);
        let http = Client::builder()
            .timeout(timeout_duration)
            .build()
            .map_err(|e| ApiError::from_reqwest(e, self.config.timeout_ms))?;

        tracing::debug!(
            base_address = %base,
            timeout_ms = self.config.timeout_ms,
            interceptor = ?self.interceptor,
            "API client initialized"
        );

        Ok(ApiClient {
            inner: Arc::new(Inner {
                http,
                base,
                timeout_duration,
                config: self.config,
                interceptor: self.interceptor,
                notifier: self.notifier,
                metrics_enabled: self.metrics_enabled,
            }),
        })
    }
}

struct Inner {
    http: Client,
    base: Url,
    timeout_duration: Duration,
    config: ClientConfig,
    interceptor: Box<dyn RequestInterceptor>,
    notifier: Arc<dyn Notifier>,
    metrics_enabled: bool,
}

/// Single entry point for calls to the backend API.
///
/// Cloning is cheap and clones share configuration, interceptor and sink.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.inner.base.as_str())
            .field("timeout_ms", &self.inner.config.timeout_ms)
            .field("interceptor", &self.inner.interceptor)
            .finish()
    }
}

impl ApiClient {
    /// Start building a client over `config`.
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            interceptor: Box::new(PassThrough),
            notifier: Arc::new(LogNotifier),
            metrics_enabled: true,
        }
    }

    /// Client with the pass-through interceptor and the given sink.
    pub fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> ApiResult<Self> {
        Self::builder(config).notifier(notifier).build()
    }

    /// The configuration captured at construction.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout_duration
    }

    /// Resolve a call path against the base address.
    ///
    /// Relative paths are appended to the base with exactly one separating
    /// slash; absolute `http(s)` URLs are used unchanged.
    pub fn url_for(&self, path: &str) -> ApiResult<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Url::parse(path).map_err(|e| ApiError::InvalidArgument(e.to_string()));
        }

        let base = self.inner.base.as_str().trim_end_matches('/');
        let relative = path.trim_start_matches('/');
        let joined = if relative.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, relative)
        };

        Url::parse(&joined).map_err(|e| ApiError::InvalidArgument(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url_for(path)?;
        self.dispatch(self.inner.http.request(Method::GET, url)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        self.dispatch(self.inner.http.request(Method::GET, url).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        self.dispatch(self.inner.http.request(Method::POST, url).json(body))
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        self.dispatch(self.inner.http.request(Method::PUT, url).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url_for(path)?;
        self.dispatch(self.inner.http.request(Method::DELETE, url)).await
    }

    /// POST a multipart form (file uploads).
    pub async fn send_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> ApiResult<T> {
        let url = self.url_for(path)?;
        self.dispatch(self.inner.http.request(Method::POST, url).multipart(form))
            .await
    }

    async fn dispatch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let request = builder
            .build()
            .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

        let request = match self.inner.interceptor.intercept(request) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Request refused by interceptor");
                return Err(e);
            }
        };

        let method = request.method().clone();
        let url = request.url().clone();
        let started = Instant::now();
        let timeout_ms = self.inner.config.timeout_ms;

        let exchange = async {
            let response = self
                .inner
                .http
                .execute(request)
                .await
                .map_err(|e| ApiError::from_reqwest(e, timeout_ms))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::from_status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| ApiError::from_reqwest(e, timeout_ms))?;
            unwrap_body::<T>(&body)
        };

        let result = match timeout(self.inner.timeout_duration, exchange).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout { timeout_ms }),
        };

        let elapsed = started.elapsed();
        match &result {
            Ok(_) => {
                tracing::debug!(
                    method = %method,
                    url = %url,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "API call succeeded"
                );
            }
            Err(e) => {
                tracing::warn!(
                    method = %method,
                    url = %url,
                    kind = e.kind(),
                    status = ?e.status(),
                    error = %e,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "API call failed"
                );
                if e.is_notified() {
                    self.inner.notifier.notify(&e.display_message());
                    if self.inner.metrics_enabled {
                        metrics::record_notification(e.kind());
                    }
                }
            }
        }

        if self.inner.metrics_enabled {
            let outcome = match &result {
                Ok(_) => metrics::OUTCOME_OK,
                Err(e) => e.kind(),
            };
            metrics::record_request(method.as_str(), outcome, elapsed);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::builder(ClientConfig {
            base_address: base.into(),
            timeout_ms: 5000,
        })
        .build()
        .unwrap()
    }

    #[test]
    fn test_url_for_joins_with_single_slash() {
        let c = client("http://localhost:8080/api");
        assert_eq!(
            c.url_for("/cities").unwrap().as_str(),
            "http://localhost:8080/api/cities"
        );
        assert_eq!(
            c.url_for("cities/3").unwrap().as_str(),
            "http://localhost:8080/api/cities/3"
        );

        let c = client("http://localhost:8080/api/");
        assert_eq!(
            c.url_for("/weather-data/count").unwrap().as_str(),
            "http://localhost:8080/api/weather-data/count"
        );
    }

    #[test]
    fn test_url_for_keeps_query_and_absolute_urls() {
        let c = client("http://localhost:8080/api");
        assert_eq!(
            c.url_for("/weather-data/city/1?startDate=2024-01-01").unwrap().as_str(),
            "http://localhost:8080/api/weather-data/city/1?startDate=2024-01-01"
        );
        assert_eq!(
            c.url_for("https://other.example.com/x").unwrap().as_str(),
            "https://other.example.com/x"
        );
        assert_eq!(c.url_for("").unwrap().as_str(), "http://localhost:8080/api");
    }

    #[test]
    fn test_invalid_base_is_rejected_at_build() {
        let result = ApiClient::builder(ClientConfig {
            base_address: "::nope::".into(),
            timeout_ms: 10,
        })
        .build();
        assert!(matches!(result, Err(ApiError::Transport { status: None, .. })));
    }

    #[test]
    fn test_config_is_a_snapshot() {
        let mut config = ClientConfig::default();
        let c = ApiClient::builder(config.clone()).build().unwrap();
        config.timeout_ms = 1;
        assert_eq!(c.config().timeout_ms, 5000);
        assert_eq!(c.timeout(), Duration::from_millis(5000));
    }
}
