//! Exact-match route table with a fallback route.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

use super::registrar::{RouteRegistrar, RouteTarget};

/// A single route: an exact URL path fragment and the pair rendered for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL path fragment, matched exactly (e.g., "/view1").
    pub path: String,
    /// Identifier of the markup fragment to render.
    pub view_template: String,
    /// Identifier of the behavior unit bound to that view.
    pub controller: String,
}

impl RouteEntry {
    /// The (view template, controller) pair for this route.
    pub fn target(&self) -> RouteTarget {
        RouteTarget {
            view_template: self.view_template.clone(),
            controller: self.controller.clone(),
        }
    }
}

/// Static route table consulted by the navigation dispatcher.
///
/// Entries are kept in declaration order. Lookup is exact string comparison;
/// there are no parameters, wildcards, or precedence rules, so a miss is not
/// an error: it resolves to the designated default route.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// All routes in declaration order.
    entries: Vec<RouteEntry>,
    /// Index into `entries` of the default route.
    default_index: usize,
}

impl RouteTable {
    /// Build a route table, validating its invariants.
    ///
    /// Fails when the table is empty, a path appears twice, or the default
    /// path names a route absent from the table.
    pub fn new(entries: Vec<RouteEntry>, default_path: &str) -> AppResult<Self> {
        if entries.is_empty() {
            return Err(AppError::EmptyRouteTable);
        }

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.path == entry.path) {
                return Err(AppError::DuplicateRoute(entry.path.clone()));
            }
        }

        let default_index = entries
            .iter()
            .position(|e| e.path == default_path)
            .ok_or_else(|| AppError::UnknownDefaultRoute(default_path.to_string()))?;

        debug!(routes = entries.len(), default = %default_path, "built route table");

        Ok(Self {
            entries,
            default_index,
        })
    }

    /// Resolve a path to its route entry.
    ///
    /// Total: an unmatched path resolves to the default route's entry.
    pub fn resolve(&self, path: &str) -> &RouteEntry {
        self.lookup(path).unwrap_or_else(|| self.default_entry())
    }

    /// Exact lookup without the default fallback.
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// The default route's entry.
    pub fn default_entry(&self) -> &RouteEntry {
        &self.entries[self.default_index]
    }

    /// The default route's path.
    pub fn default_path(&self) -> &str {
        &self.default_entry().path
    }

    /// All routes in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no routes. Construction rejects empty
    /// tables, so this is always false for a built table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replay the table into a registrar, one call per entry in declaration
    /// order, followed by the default-route designation.
    pub fn install(&self, registrar: &mut dyn RouteRegistrar) {
        for entry in &self.entries {
            registrar.register(&entry.path, &entry.target());
        }
        registrar.set_default(self.default_path());
    }
}
