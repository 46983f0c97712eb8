//! Menu entry and tree types.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::routing::RouteTable;

/// A navigational link, optionally with one level of children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display name.
    pub name: String,

    /// Visibility/enablement flag. Inactive entries stay in the data and are
    /// suppressed by the rendering layer.
    #[serde(default = "default_true")]
    pub active: bool,

    /// Link destination path. Conventionally a route table path, though the
    /// data does not enforce it (see [`MenuTree::unrouted_links`]).
    pub link: String,

    /// Ordered child entries, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

fn default_true() -> bool {
    true
}

impl MenuEntry {
    /// Whether this entry has child entries.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Ordered, immutable navigation tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
}

impl MenuTree {
    /// Build a tree from declaration-ordered entries.
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// Top-level entries in declaration order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Active top-level entries in declaration order.
    pub fn visible(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().filter(|e| e.active)
    }

    /// Depth-first walk over every entry at any depth, each entry before
    /// its children.
    pub fn iter_all(&self) -> impl Iterator<Item = &MenuEntry> {
        let mut stack: Vec<&MenuEntry> = self.entries.iter().rev().collect();
        std::iter::from_fn(move || {
            let entry = stack.pop()?;
            stack.extend(entry.children.iter().rev());
            Some(entry)
        })
    }

    /// Entries whose link matches no route table path.
    ///
    /// The shipped data intentionally carries such links (placeholder
    /// targets), so this reports rather than rejects. Each offender is also
    /// logged as a warning.
    pub fn unrouted_links<'a>(&'a self, routes: &RouteTable) -> Vec<&'a MenuEntry> {
        let unrouted: Vec<&MenuEntry> = self
            .iter_all()
            .filter(|e| routes.lookup(&e.link).is_none())
            .collect();

        for entry in &unrouted {
            warn!(name = %entry.name, link = %entry.link, "menu link has no matching route");
        }

        unrouted
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::routing::RouteEntry;

    fn entry(name: &str, link: &str) -> MenuEntry {
        MenuEntry {
            name: name.to_string(),
            active: true,
            link: link.to_string(),
            children: Vec::new(),
        }
    }

    fn sample_tree() -> MenuTree {
        let mut about = entry("About Us", "/view2");
        about.children = vec![
            entry("Management 1", "/view1"),
            entry("Management 2", "/view2"),
        ];

        let mut archive = entry("Archive", "/view2");
        archive.active = false;

        MenuTree::new(vec![
            entry("Home", "/view1"),
            about,
            entry("Services", "/services"),
            archive,
        ])
    }

    fn sample_routes() -> RouteTable {
        RouteTable::new(
            vec![
                RouteEntry {
                    path: "/view1".to_string(),
                    view_template: "view1".to_string(),
                    controller: "View1Ctrl".to_string(),
                },
                RouteEntry {
                    path: "/view2".to_string(),
                    view_template: "view2".to_string(),
                    controller: "View2Ctrl".to_string(),
                },
            ],
            "/view1",
        )
        .unwrap()
    }

    #[test]
    fn entries_preserve_declaration_order() {
        let tree = sample_tree();

        let names: Vec<&str> = tree.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "About Us", "Services", "Archive"]);

        // Repeated reads observe the same order.
        let again: Vec<&str> = tree.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn children_preserve_declared_order_and_count() {
        let tree = sample_tree();

        let about = &tree.entries()[1];
        assert_eq!(about.name, "About Us");
        assert_eq!(about.children.len(), 2);
        assert_eq!(about.children[0].name, "Management 1");
        assert_eq!(about.children[1].name, "Management 2");
    }

    #[test]
    fn visible_filters_inactive_entries() {
        let tree = sample_tree();

        let names: Vec<&str> = tree.visible().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "About Us", "Services"]);

        // The inactive entry stays in the underlying data.
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn unrouted_links_reported_not_rejected() {
        let tree = sample_tree();
        let routes = sample_routes();

        let unrouted = tree.unrouted_links(&routes);
        assert_eq!(unrouted.len(), 1);
        assert_eq!(unrouted[0].name, "Services");
        assert_eq!(unrouted[0].link, "/services");
    }

    #[test]
    fn iter_all_reaches_entries_at_any_depth() {
        let mut child = entry("Child", "/view1");
        child.children = vec![entry("Deep", "/nowhere")];
        let mut top = entry("Top", "/view1");
        top.children = vec![child];

        let tree = MenuTree::new(vec![top, entry("Next", "/view2")]);

        let names: Vec<&str> = tree.iter_all().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Top", "Child", "Deep", "Next"]);
    }

    #[test]
    fn unrouted_links_include_nested_children() {
        let mut child = entry("Child", "/view1");
        child.children = vec![entry("Deep", "/nowhere")];
        let mut top = entry("Top", "/view1");
        top.children = vec![child];

        let tree = MenuTree::new(vec![top]);
        let routes = sample_routes();

        let names: Vec<&str> = tree
            .unrouted_links(&routes)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Deep"]);
    }

    #[test]
    fn nested_children_parse_with_declared_order_and_count() {
        let parsed: MenuEntry = toml::from_str(
            r#"
            name = "Top"
            link = "/view1"

            [[children]]
            name = "Child A"
            link = "/view1"

            [[children.children]]
            name = "Deep 1"
            link = "/nowhere"

            [[children.children]]
            name = "Deep 2"
            link = "/elsewhere"

            [[children]]
            name = "Child B"
            link = "/view2"
        "#,
        )
        .unwrap();

        assert_eq!(parsed.children.len(), 2);
        assert_eq!(parsed.children[0].name, "Child A");
        assert_eq!(parsed.children[0].children.len(), 2);
        assert_eq!(parsed.children[0].children[0].name, "Deep 1");
        assert_eq!(parsed.children[0].children[1].name, "Deep 2");
        assert_eq!(parsed.children[1].name, "Child B");

        let tree = MenuTree::new(vec![parsed]);
        let names: Vec<&str> = tree.iter_all().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Top", "Child A", "Deep 1", "Deep 2", "Child B"]);
    }

    #[test]
    fn active_defaults_to_true_when_absent() {
        let parsed: MenuEntry =
            toml::from_str("name = \"Home\"\nlink = \"/view1\"").unwrap();
        assert!(parsed.active);
        assert!(!parsed.has_children());
    }
}
