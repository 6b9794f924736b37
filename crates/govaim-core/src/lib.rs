//! Govaim Core
//!
//! Toolkit-independent pieces of the Govaim login page:
//!
//! - [`paths`]: the route paths the login page knows about
//! - [`navigation`]: the navigation capability the page drives
//! - [`form`]: login form state, field descriptors and submit handling
//!
//! Nothing here talks to a network or touches storage. The login form
//! only ever changes the active route.

pub mod error;
pub mod form;
pub mod navigation;
pub mod paths;

pub use error::{CoreError, Result};
pub use form::{FieldSpec, InputKind, LoginForm, SubmitEvent, PASSWORD_FIELD, USERNAME_FIELD};
pub use navigation::{Navigate, NavigationLog};
pub use paths::AppPath;
