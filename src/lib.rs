//! Weather data admin console library.
//!
//! Two pieces the console pages are built on:
//! - `client`: the facade every backend call goes through (base address,
//!   timeout, envelope unwrapping, failure notifications)
//! - `routing`: the route table and the navigation engine that loads each
//!   page on its first visit

pub mod api;
pub mod client;
pub mod config;
pub mod observability;
pub mod routing;
pub mod views;

pub use client::{ApiClient, ApiError, Envelope, Notifier};
pub use config::AppConfig;
pub use routing::{Navigator, RouteTable};
