//! Backend API client subsystem.
//!
//! # Data Flow
//! ```text
//! caller (resource / view)
//!     → facade.rs (join base address, build request)
//!     → interceptor.rs (annotate or refuse; refused requests are never sent)
//!     → reqwest transport under the configured timeout
//!     → non-2xx / network / timeout  → ApiError::Transport | Timeout
//!     → envelope.rs (code == 200 ?)
//!         yes → payload only
//!         no  → ApiError::Logical
//!     → notify.rs (one message per surfaced failure, none on success)
//!     → caller gets Ok(payload) or Err(ApiError)
//! ```

pub mod envelope;
pub mod error;
pub mod facade;
pub mod interceptor;
pub mod notify;

pub use envelope::{Envelope, SUCCESS_CODE};
pub use error::{ApiError, ApiResult, FALLBACK_MESSAGE};
pub use facade::{ApiClient, ApiClientBuilder};
pub use interceptor::{BearerToken, PassThrough, RequestIdStamp, RequestInterceptor};
pub use notify::{ChannelNotifier, LogNotifier, Notifier};
