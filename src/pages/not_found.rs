use dioxus::prelude::*;

use crate::app::Route;

/// 404 page for paths outside the routing table
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        main { class: "not-found",
            h1 { class: "page-title", "404" }
            p { class: "body-text", "Nothing lives at {path}" }
            Link { class: "btn-link", to: Route::Login {}, "Back to sign in" }
        }
    }
}
