//! Login form state and handlers.
//!
//! The form holds one piece of state, an error message that starts empty.
//! Nothing assigns it: submitting never authenticates, validates or reads
//! the field values, it only navigates to the dashboard. The alert slot is
//! kept so a failure path has somewhere to surface once one exists.

use crate::navigation::Navigate;
use crate::paths::AppPath;

/// HTML input type of a form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

impl InputKind {
    /// Value for the `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
        }
    }
}

/// Static description of one uncontrolled form field.
///
/// `required` only sets the native constraint; no other validation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub required: bool,
}

pub const USERNAME_FIELD: FieldSpec = FieldSpec {
    id: "username",
    name: "username",
    label: "Username",
    kind: InputKind::Text,
    placeholder: "Enter your username",
    required: true,
};

pub const PASSWORD_FIELD: FieldSpec = FieldSpec {
    id: "password",
    name: "password",
    label: "Password",
    kind: InputKind::Password,
    placeholder: "Enter your password",
    required: true,
};

/// The toolkit's submit event, reduced to what the form needs from it.
pub trait SubmitEvent {
    /// Stop the default document submission (full page reload)
    fn prevent_default(&self);
}

/// Login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    error: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form whose alert slot already holds `error`.
    ///
    /// No handler produces such a form; it exists for rendering the slot.
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// Message for the alert region, `None` when the error is empty
    pub fn alert_message(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    /// Fields rendered by the form, in display order
    pub fn fields(&self) -> [FieldSpec; 2] {
        [USERNAME_FIELD, PASSWORD_FIELD]
    }

    /// Handle a form submission.
    ///
    /// Suppresses the default submission, then navigates to the dashboard.
    /// Field contents are not read.
    pub fn handle_submit(&self, event: &impl SubmitEvent, mut nav: impl Navigate) {
        event.prevent_default();
        tracing::debug!(to = AppPath::DASHBOARD, "login form submitted");
        nav.navigate(AppPath::DASHBOARD);
    }

    /// Handle the "Sign up" control
    pub fn navigate_to_register(&self, mut nav: impl Navigate) {
        tracing::debug!(to = AppPath::REGISTER, "sign up requested");
        nav.navigate(AppPath::REGISTER);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::navigation::NavigationLog;

    #[derive(Default)]
    struct RecordingEvent {
        prevented: Cell<usize>,
    }

    impl SubmitEvent for RecordingEvent {
        fn prevent_default(&self) {
            self.prevented.set(self.prevented.get() + 1);
        }
    }

    #[test]
    fn new_form_has_no_alert() {
        let form = LoginForm::new();
        assert_eq!(form.error(), "");
        assert_eq!(form.alert_message(), None);
    }

    #[test]
    fn alert_shows_exact_error() {
        let form = LoginForm::with_error("Invalid credentials");
        assert_eq!(form.alert_message(), Some("Invalid credentials"));
    }

    #[test]
    fn submit_navigates_to_dashboard_once() {
        let form = LoginForm::new();
        let event = RecordingEvent::default();
        let mut log = NavigationLog::new();

        form.handle_submit(&event, &mut log);

        assert_eq!(log.visits(), ["/dashboard"]);
        assert_eq!(log.count(AppPath::REGISTER), 0);
    }

    #[test]
    fn submit_suppresses_default() {
        let form = LoginForm::new();
        let event = RecordingEvent::default();
        let mut log = NavigationLog::new();

        form.handle_submit(&event, &mut log);

        assert_eq!(event.prevented.get(), 1);
    }

    #[test]
    fn submit_leaves_error_untouched() {
        let form = LoginForm::new();
        let before = form.clone();
        let mut log = NavigationLog::new();

        form.handle_submit(&RecordingEvent::default(), &mut log);
        form.navigate_to_register(&mut log);

        assert_eq!(form, before);
        assert_eq!(form.alert_message(), None);
    }

    #[test]
    fn submit_does_not_clear_existing_error() {
        let form = LoginForm::with_error("stale");
        let mut log = NavigationLog::new();

        form.handle_submit(&RecordingEvent::default(), &mut log);

        assert_eq!(form.alert_message(), Some("stale"));
        assert_eq!(log.visits(), ["/dashboard"]);
    }

    #[test]
    fn sign_up_navigates_to_register_only() {
        let form = LoginForm::new();
        let mut log = NavigationLog::new();

        form.navigate_to_register(&mut log);

        assert_eq!(log.visits(), ["/auth/register"]);
        assert_eq!(log.count(AppPath::DASHBOARD), 0);
    }

    #[test]
    fn fields_are_required() {
        let form = LoginForm::new();
        let [username, password] = form.fields();

        assert_eq!(username.name, "username");
        assert_eq!(username.kind.as_str(), "text");
        assert!(username.required);

        assert_eq!(password.name, "password");
        assert_eq!(password.kind.as_str(), "password");
        assert!(password.required);
    }
}
