//! Navigation engine.
//!
//! # Responsibilities
//! - Resolve a path or route name to its entry
//! - Invoke the entry's loader on the first visit only, then reuse the page
//! - Track the current route
//!
//! # Design Decisions
//! - One `OnceCell` per route: concurrent first visits share a single load
//! - A failed load leaves the route unloaded so the next visit retries
//! - Visiting one route never touches another route's loader

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::routing::table::RouteTable;
use crate::views::{LoadError, View};

const NO_ROUTE: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route matches '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Result of a successful navigation.
#[derive(Clone)]
pub struct Resolved {
    pub name: &'static str,
    pub path: &'static str,
    pub view: Arc<dyn View>,
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolved")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("view", &self.view.title())
            .finish()
    }
}

/// Resolves navigation events against a route table.
pub struct Navigator {
    table: RouteTable,
    slots: Vec<OnceCell<Arc<dyn View>>>,
    current: AtomicUsize,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        let slots = (0..table.len()).map(|_| OnceCell::new()).collect();
        Self {
            table,
            slots,
            current: AtomicUsize::new(NO_ROUTE),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Navigate to a URL path. Query strings and fragments are ignored.
    pub async fn navigate(&self, path: &str) -> Result<Resolved, NavigationError> {
        let normalized = normalize_path(path);
        let index = self
            .table
            .position_by_path(&normalized)
            .ok_or_else(|| NavigationError::NotFound(path.to_string()))?;
        self.activate(index).await
    }

    /// Navigate to a route by its unique name.
    pub async fn navigate_by_name(&self, name: &str) -> Result<Resolved, NavigationError> {
        let index = self
            .table
            .position_by_name(name)
            .ok_or_else(|| NavigationError::NotFound(name.to_string()))?;
        self.activate(index).await
    }

    /// Whether the named route's page has been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.table
            .position_by_name(name)
            .map(|i| self.slots[i].initialized())
            .unwrap_or(false)
    }

    /// Name of the route most recently navigated to.
    pub fn current(&self) -> Option<&'static str> {
        let index = self.current.load(Ordering::Acquire);
        self.table.entries().get(index).map(|e| e.name)
    }

    async fn activate(&self, index: usize) -> Result<Resolved, NavigationError> {
        let entry = self.table.entries()[index];
        let slot = &self.slots[index];

        let view = slot
            .get_or_try_init(move || async move {
                tracing::debug!(route = entry.name, path = entry.path, "Loading route view");
                (entry.loader)().await
            })
            .await
            .map_err(|e| {
                tracing::warn!(route = entry.name, error = %e, "Route view failed to load");
                NavigationError::Load(e)
            })?
            .clone();

        self.current.store(index, Ordering::Release);
        tracing::debug!(route = entry.name, path = entry.path, "Navigated");

        Ok(Resolved {
            name: entry.name,
            path: entry.path,
            view,
        })
    }
}

/// Strip query and fragment, ensure a leading slash, drop a trailing slash.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
