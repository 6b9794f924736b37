//! Bridges between the Dioxus runtime and `govaim_core`.
//!
//! ## Usage
//!
//! ```ignore
//! let nav = use_router_navigation();
//! form.read().navigate_to_register(nav);
//! ```

use dioxus::prelude::*;
use govaim_core::{Navigate, SubmitEvent};

use crate::app::Route;

/// Receiver of resolved routes. The app pushes them onto the Dioxus router.
pub trait RouteSink {
    fn push_route(&mut self, route: Route);
}

impl RouteSink for Navigator {
    fn push_route(&mut self, route: Route) {
        self.push(route);
    }
}

/// [`Navigate`] over the Dioxus router.
///
/// Path strings are parsed into [`Route`]s before being pushed. Any
/// absolute path parses: paths outside the routing table land on
/// [`Route::NotFound`]. Only strings the router cannot parse at all are
/// dropped with a warning.
#[derive(Clone, Copy)]
pub struct RouterNavigation<S = Navigator> {
    sink: S,
}

impl<S: RouteSink> Navigate for RouterNavigation<S> {
    fn navigate(&mut self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                if matches!(route, Route::NotFound { .. }) {
                    tracing::warn!(path, "navigating outside the routing table");
                } else {
                    tracing::debug!(path, "navigating");
                }
                self.sink.push_route(route);
            }
            Err(_) => {
                tracing::warn!(path, "navigation target is not a route path");
            }
        }
    }
}

/// Hook returning a [`RouterNavigation`] for the surrounding router.
///
/// Must be called from a component rendered inside `Router::<Route>`.
pub fn use_router_navigation() -> RouterNavigation {
    RouterNavigation {
        sink: use_navigator(),
    }
}

/// [`SubmitEvent`] view of a Dioxus form event.
pub struct FormSubmit<'a>(pub &'a FormEvent);

impl SubmitEvent for FormSubmit<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

#[cfg(test)]
mod tests {
    use govaim_core::{AppPath, LoginForm, SubmitEvent};

    use super::*;

    impl RouteSink for Vec<Route> {
        fn push_route(&mut self, route: Route) {
            self.push(route);
        }
    }

    struct NoopEvent;

    impl SubmitEvent for NoopEvent {
        fn prevent_default(&self) {}
    }

    fn navigation() -> RouterNavigation<Vec<Route>> {
        RouterNavigation { sink: Vec::new() }
    }

    #[test]
    fn dashboard_path_pushes_dashboard_route() {
        let mut nav = navigation();
        nav.navigate(AppPath::DASHBOARD);
        assert_eq!(nav.sink, vec![Route::Dashboard {}]);
    }

    #[test]
    fn register_path_pushes_register_route() {
        let mut nav = navigation();
        nav.navigate("/auth/register");
        assert_eq!(nav.sink, vec![Route::Register {}]);
    }

    #[test]
    fn unknown_path_pushes_not_found() {
        let mut nav = navigation();
        nav.navigate("/reports/2024");
        assert_eq!(
            nav.sink,
            vec![Route::NotFound {
                segments: vec!["reports".to_string(), "2024".to_string()],
            }]
        );
    }

    #[test]
    fn form_handlers_reach_router_routes() {
        let form = LoginForm::new();
        let mut nav = navigation();

        form.handle_submit(&NoopEvent, &mut nav);
        form.navigate_to_register(&mut nav);

        assert_eq!(nav.sink, vec![Route::Dashboard {}, Route::Register {}]);
    }
}
