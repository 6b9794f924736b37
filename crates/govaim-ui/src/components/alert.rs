//! Alert Components
//!
//! Destructive banner for failure messages.

use dioxus::prelude::*;

/// Alert banner container
///
/// ```rust,ignore
/// rsx! {
///     Alert {
///         AlertDescription { "{message}" }
///     }
/// }
/// ```
#[component]
pub fn Alert(children: Element) -> Element {
    rsx! {
        div { class: "alert alert-destructive", role: "alert", {children} }
    }
}

/// Body text of an [`Alert`]
#[component]
pub fn AlertDescription(children: Element) -> Element {
    rsx! {
        div { class: "alert-description", {children} }
    }
}
