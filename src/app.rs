use dioxus::prelude::*;

use crate::pages::{Dashboard, Login, NotFound, Register};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - redirects to the login page
/// - `/auth/login` - username/password form
/// - `/auth/register` - account registration
/// - `/dashboard` - landing page after sign-in
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
