//! Login page - username/password form.
//!
//! Submitting goes straight to the dashboard; credentials are not checked
//! or sent anywhere. The alert region renders only when the form carries
//! an error message, and no handler sets one yet.

use dioxus::prelude::*;
use govaim_core::{LoginForm, Navigate, SubmitEvent};
use govaim_ui::{Alert, AlertDescription, Button, ButtonVariant, Input};

use crate::context::{use_router_navigation, FormSubmit};

/// Login page component.
///
/// Owns the form state and wires its handlers to the router.
#[component]
pub fn Login() -> Element {
    let form = use_signal(LoginForm::new);
    let mut actions = LoginActions {
        nav: use_router_navigation(),
    };

    rsx! {
        LoginView {
            state: form(),
            on_submit: move |evt: FormEvent| actions.submit(&form.read(), &FormSubmit(&evt)),
            on_sign_up: move |_| actions.sign_up(&form.read()),
        }
    }
}

/// What the two controls of the login view do.
#[derive(Clone, Copy)]
struct LoginActions<N> {
    nav: N,
}

impl<N: Navigate> LoginActions<N> {
    /// "Sign in" / form submission
    fn submit(&mut self, form: &LoginForm, event: &impl SubmitEvent) {
        form.handle_submit(event, &mut self.nav);
    }

    /// "Sign up"
    fn sign_up(&mut self, form: &LoginForm) {
        form.navigate_to_register(&mut self.nav);
    }
}

/// Markup of the login page for a given form state.
#[component]
pub fn LoginView(
    state: LoginForm,
    on_submit: EventHandler<FormEvent>,
    on_sign_up: EventHandler<()>,
) -> Element {
    let fields = state.fields();

    rsx! {
        main { class: "auth-page",
            div { class: "auth-card",
                header { class: "auth-header",
                    h2 { class: "auth-title", "Welcome Back" }
                    p { class: "auth-subtitle", "Sign in to your account" }
                }

                form {
                    class: "auth-form",
                    onsubmit: move |evt| on_submit.call(evt),

                    if let Some(message) = state.alert_message() {
                        Alert {
                            AlertDescription { "{message}" }
                        }
                    }

                    div { class: "auth-fields",
                        for field in fields {
                            Input {
                                key: "{field.name}",
                                id: field.id.to_string(),
                                name: field.name.to_string(),
                                label: field.label.to_string(),
                                input_type: field.kind.as_str().to_string(),
                                placeholder: field.placeholder.to_string(),
                                required: field.required,
                            }
                        }
                    }

                    Button {
                        button_type: "submit".to_string(),
                        class: "btn-full".to_string(),
                        "Sign in"
                    }
                }

                footer { class: "auth-footer",
                    p { class: "auth-link",
                        "Don't have an account? "
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| on_sign_up.call(()),
                            "Sign up"
                        }
                    }
                }
            }
        }
    }
}
