//! The console's route table.
//!
//! # Responsibilities
//! - Declare the ordered mapping from paths to page loaders
//! - Guarantee path and name uniqueness
//!
//! # Design Decisions
//! - Declared once, immutable afterwards
//! - Loaders are plain function pointers; declaring a route loads nothing

use std::collections::HashSet;

use thiserror::Error;

use crate::views::{self, ViewLoader};

/// Binding from a navigable path to the page rendered for it.
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub loader: ViewLoader,
}

impl RouteEntry {
    pub const fn new(path: &'static str, name: &'static str, loader: ViewLoader) -> Self {
        Self { path, name, loader }
    }
}

/// Errors raised while assembling a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("duplicate route path '{0}'")]
    DuplicatePath(&'static str),

    #[error("duplicate route name '{0}'")]
    DuplicateName(&'static str),

    #[error("route path '{0}' must start with '/'")]
    InvalidPath(&'static str),
}

/// Ordered, validated list of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate and freeze a set of routes.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(RouteError::InvalidPath(entry.path));
            }
            if !paths.insert(entry.path) {
                return Err(RouteError::DuplicatePath(entry.path));
            }
            if !names.insert(entry.name) {
                return Err(RouteError::DuplicateName(entry.name));
            }
        }

        Ok(Self { entries })
    }

    /// The console's five pages.
    pub fn standard() -> Self {
        Self {
            entries: standard_routes().to_vec(),
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position_by_path(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn by_path(&self, path: &str) -> Option<&RouteEntry> {
        self.position_by_path(path).map(|i| &self.entries[i])
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.position_by_name(name).map(|i| &self.entries[i])
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_routes() -> [RouteEntry; 5] {
    [
        RouteEntry::new("/", "Home", views::home::load),
        RouteEntry::new("/cities", "Cities", views::city_list::load),
        RouteEntry::new("/weather-data", "WeatherData", views::weather_list::load),
        RouteEntry::new("/users", "Users", views::user_list::load),
        RouteEntry::new("/weather-trend", "WeatherTrend", views::weather_trend::load),
    ]
}
