//! Declarative site file loading and validation.
//!
//! The site file is plain TOML: a route list, the default route path, and
//! the navigation menu. It is parsed once at startup into a validated
//! [`Site`] and never mutated afterwards.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::menu::{MenuEntry, MenuTree};
use crate::routing::{RouteEntry, RouteTable};

/// Raw serde mirror of the site file.
#[derive(Debug, Deserialize)]
pub struct SiteFile {
    /// Site title rendered into the shell page.
    #[serde(default = "default_title")]
    pub title: String,

    /// Fallback path used when no route matches.
    pub default_route: String,

    /// Route declarations.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,

    /// Top-level menu entries.
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
}

fn default_title() -> String {
    "Vetrina".to_string()
}

/// Validated site configuration.
#[derive(Debug, Clone)]
pub struct Site {
    /// Site title.
    pub title: String,
    /// Validated route table.
    pub routes: RouteTable,
    /// Navigation tree.
    pub menu: MenuTree,
}

impl Site {
    /// Load and validate a site file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let file: SiteFile = toml::from_str(&raw)?;

        debug!(
            routes = file.routes.len(),
            menu_entries = file.menu.len(),
            "parsed site file"
        );

        let site = Site::try_from(file)?;
        info!(
            path = %path.display(),
            routes = site.routes.len(),
            title = %site.title,
            "site loaded"
        );

        Ok(site)
    }
}

impl TryFrom<SiteFile> for Site {
    type Error = AppError;

    fn try_from(file: SiteFile) -> AppResult<Self> {
        let routes = RouteTable::new(file.routes, &file.default_route)?;

        Ok(Self {
            title: file.title,
            routes,
            menu: MenuTree::new(file.menu),
        })
    }
}
