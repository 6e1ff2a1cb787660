//! Client-side metrics.
//!
//! # Metrics
//! - `weather_admin_api_requests_total` (counter): calls by method and outcome
//! - `weather_admin_api_request_duration_seconds` (histogram): call latency
//! - `weather_admin_notifications_total` (counter): failures surfaced to the user
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the library installs no recorder
//! - Without a recorder every call is a no-op

use std::time::Duration;

/// Outcome label for a successful call.
pub const OUTCOME_OK: &str = "ok";

/// Record one finished API call.
pub fn record_request(method: &str, outcome: &'static str, elapsed: Duration) {
    ::metrics::counter!(
        "weather_admin_api_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome
    )
    .increment(1);

    ::metrics::histogram!(
        "weather_admin_api_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(elapsed.as_secs_f64());
}

/// Record one message written to the notification sink.
pub fn record_notification(kind: &'static str) {
    ::metrics::counter!("weather_admin_notifications_total", "kind" => kind).increment(1);
}
