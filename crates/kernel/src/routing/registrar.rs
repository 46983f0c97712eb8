//! Route registration seam.
//!
//! Routes are never registered against an ambient global framework object.
//! The dependency points the other way: whatever dispatches navigation
//! implements [`RouteRegistrar`] and receives the table through
//! [`RouteTable::install`](super::RouteTable::install).

use serde::{Deserialize, Serialize};

/// The (view template, controller) pair handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTarget {
    /// Identifier of the markup fragment to render.
    pub view_template: String,
    /// Identifier of the behavior unit bound to that view.
    pub controller: String,
}

/// Consumer of route registrations.
///
/// Implemented by the navigation dispatcher of whichever rendering framework
/// the site is adapted to. Registration order follows declaration order.
pub trait RouteRegistrar {
    /// Register one route.
    fn register(&mut self, path: &str, target: &RouteTarget);

    /// Designate the fallback route used when no path matches.
    fn set_default(&mut self, path: &str);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::routing::{RouteEntry, RouteTable};

    /// Registrar that records calls in order.
    #[derive(Default)]
    struct Recorder {
        registered: Vec<(String, RouteTarget)>,
        default: Option<String>,
    }

    impl RouteRegistrar for Recorder {
        fn register(&mut self, path: &str, target: &RouteTarget) {
            self.registered.push((path.to_string(), target.clone()));
        }

        fn set_default(&mut self, path: &str) {
            self.default = Some(path.to_string());
        }
    }

    #[test]
    fn install_replays_table_in_order() {
        let table = RouteTable::new(
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
        .unwrap();

        let mut recorder = Recorder::default();
        table.install(&mut recorder);

        assert_eq!(recorder.registered.len(), 2);
        assert_eq!(recorder.registered[0].0, "/view1");
        assert_eq!(recorder.registered[1].0, "/view2");
        assert_eq!(recorder.registered[1].1.controller, "View2Ctrl");
        assert_eq!(recorder.default.as_deref(), Some("/view1"));
    }
}
