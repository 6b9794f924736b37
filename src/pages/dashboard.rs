//! Dashboard page - where the login form lands.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        main { class: "dashboard",
            header { class: "dashboard-header",
                h1 { class: "page-title", "Dashboard" }
                Link { class: "btn-ghost", to: Route::Login {}, "Sign out" }
            }
            p { class: "body-text", "Welcome to Govaim." }
        }
    }
}
