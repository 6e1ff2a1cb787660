//! Console pages.
//!
//! Each page is reached through the route table and loaded on first
//! navigation. A page renders to plain text using data fetched through
//! the [`ApiClient`] in its [`ViewContext`].
//!
//! ```text
//! Navigator::navigate("/cities")
//!     → routing table entry → views::city_list::load()   (first visit only)
//!     → Arc<dyn View>
//!     → view.render(&ctx) → ApiClient calls → String
//! ```

pub mod city_list;
pub mod home;
pub mod table;
pub mod user_list;
pub mod weather_list;
pub mod weather_trend;

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::client::{ApiClient, ApiError, ApiResult};

/// A page that can be rendered for the console.
pub trait View: Send + Sync {
    /// Human-readable page title.
    fn title(&self) -> &'static str;

    /// Fetch whatever the page needs and render it as text.
    fn render<'a>(&'a self, ctx: &'a ViewContext) -> BoxFuture<'a, ApiResult<String>>;
}

/// Error raised when a page cannot be produced by its loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load view '{view}': {reason}")]
pub struct LoadError {
    pub view: &'static str,
    pub reason: String,
}

/// Deferred factory for a page. Nothing is constructed until it is called.
pub type ViewLoader = fn() -> BoxFuture<'static, Result<Arc<dyn View>, LoadError>>;

/// Everything a page may use while rendering.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub api: ApiClient,
    pub params: HashMap<String, String>,
}

impl ViewContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// A required parameter.
    pub fn param(&self, key: &str) -> ApiResult<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ApiError::InvalidArgument(format!("missing parameter '{}'", key)))
    }

    /// A required integer parameter.
    pub fn int_param(&self, key: &str) -> ApiResult<i64> {
        let raw = self.param(key)?;
        raw.parse()
            .map_err(|_| ApiError::InvalidArgument(format!("parameter '{}' is not an integer: {}", key, raw)))
    }
}
