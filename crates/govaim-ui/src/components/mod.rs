//! Reusable UI components.

mod alert;
mod button;
mod input;

pub use alert::*;
pub use button::*;
pub use input::*;
