//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (path or route name)
//!     → navigator.rs (normalize, look up entry)
//!     → table.rs (ordered RouteEntry list)
//!     → first visit: entry.loader() → Arc<dyn View>, cached
//!     → Return: Resolved route or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes declared at startup, immutable at runtime
//! - Exact path matching after normalization
//! - Explicit NotFound rather than silent default

pub mod navigator;
pub mod table;

pub use navigator::{NavigationError, Navigator, Resolved};
pub use table::{RouteEntry, RouteError, RouteTable};
