//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (WEATHER_API_BASE_URL, WEATHER_API_TIMEOUT_MS, WEATHER_ADMIN_LOG)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → ClientConfig copied into each ApiClient at construction
//! ```
//!
//! # Design Decisions
//! - Config is read once; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ClientConfig;
pub use schema::ObservabilityConfig;
pub use validation::ValidationError;
