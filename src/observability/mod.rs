//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ApiClient calls, navigation events:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms via the metrics facade)
//!
//! Consumers:
//!     → stderr/stdout through tracing-subscriber
//!     → whatever metrics recorder the embedding application installs
//! ```

pub mod logging;
pub mod metrics;
