//! Theme engine with Tera templates and suggestion resolution.

use std::path::Path;

use anyhow::Context;
use tera::Tera;
use tracing::debug;

use crate::error::AppResult;
use crate::menu::{MenuEntry, MenuTree};

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
}

impl ThemeEngine {
    /// Create a new theme engine loading templates from the given directory.
    pub fn new(template_dir: &Path) -> AppResult<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let tera = Tera::new(pattern_str)?;

        let count = tera.get_template_names().count();
        debug!(count, "loaded templates");

        Ok(Self { tera })
    }

    /// Create a theme engine with no templates (for testing).
    pub fn empty() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Get a mutable reference to Tera (for adding templates at runtime).
    pub fn tera_mut(&mut self) -> &mut Tera {
        &mut self.tera
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    ///
    /// Example suggestions: `["menu--main", "menu"]`
    pub fn resolve_template(&self, suggestions: &[&str]) -> Option<String> {
        for suggestion in suggestions {
            let template_name = format!("{suggestion}.html");
            if self.tera.get_template(&template_name).is_ok() {
                return Some(template_name);
            }

            // Also try without .html extension (in case suggestion already has it)
            if self.tera.get_template(suggestion).is_ok() {
                return Some((*suggestion).to_string());
            }
        }

        None
    }

    /// Generate menu template suggestions, most specific first.
    pub fn menu_suggestions(menu_id: &str) -> Vec<String> {
        vec![format!("menu--{menu_id}"), "menu".to_string()]
    }

    /// Render a menu tree to navigation markup.
    ///
    /// Inactive entries (and inactive children) are suppressed here; the
    /// underlying tree keeps them.
    pub fn render_menu(&self, tree: &MenuTree, menu_id: &str) -> AppResult<String> {
        let suggestions = Self::menu_suggestions(menu_id);
        let suggestion_refs: Vec<&str> = suggestions.iter().map(|s| s.as_str()).collect();

        let template = self
            .resolve_template(&suggestion_refs)
            .unwrap_or_else(|| "menu.html".to_string());

        let entries: Vec<MenuEntry> = tree.visible().map(visible_view).collect();

        let mut context = tera::Context::new();
        context.insert("menu_id", menu_id);
        context.insert("entries", &entries);

        Ok(self.tera.render(&template, &context)?)
    }

    /// Render the shell page hosting the navigation and the client-side view
    /// mount point.
    pub fn render_page(&self, title: &str, nav: &str, default_view: &str) -> AppResult<String> {
        let template = self
            .resolve_template(&["page"])
            .unwrap_or_else(|| "page.html".to_string());

        let mut context = tera::Context::new();
        context.insert("title", title);
        context.insert("nav", nav);
        context.insert("default_view", default_view);

        Ok(self.tera.render(&template, &context)?)
    }
}

/// Clone an entry with inactive descendants removed at every depth.
fn visible_view(entry: &MenuEntry) -> MenuEntry {
    MenuEntry {
        name: entry.name.clone(),
        active: entry.active,
        link: entry.link.clone(),
        children: entry
            .children
            .iter()
            .filter(|c| c.active)
            .map(visible_view)
            .collect(),
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}
