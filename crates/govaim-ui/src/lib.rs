//! Govaim UI Components
//!
//! Dioxus widgets used by the Govaim pages:
//! - [`Input`]: labeled, uncontrolled text or password field
//! - [`Button`]: primary and link-style buttons
//! - [`Alert`] / [`AlertDescription`]: banner for failure messages
//!
//! Colors and spacing come from the app's global stylesheet; components
//! only attach class names.

pub mod components;

pub use components::*;
