//! Input Field Component
//!
//! Labeled, uncontrolled text input: the browser owns the field and its
//! value is read from the document at submission time.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Form field name submitted with the document
    pub name: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Native `required` constraint
    #[props(default = false)]
    pub required: bool,
    /// Element ID for label association, defaults to `name`
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Labeled input field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "username".to_string(),
///         label: "Username".to_string(),
///         placeholder: "Enter your username".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| props.name.clone());
    let extra_class = props.class.as_deref().unwrap_or("");
    let input_class = if extra_class.is_empty() {
        "input-field".to_string()
    } else {
        format!("input-field {}", extra_class)
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                name: "{props.name}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                placeholder: props.placeholder.clone(),
                required: props.required,
            }
        }
    }
}
