//! Registration page.
//!
//! Target of the login page's "Sign up" control. Account creation is not
//! wired to anything, so the page only points back to sign-in.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Register() -> Element {
    rsx! {
        main { class: "auth-page",
            div { class: "auth-card",
                header { class: "auth-header",
                    h2 { class: "auth-title", "Create Account" }
                    p { class: "auth-subtitle", "Registration is not open yet" }
                }
                footer { class: "auth-footer",
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { class: "btn-link", to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
