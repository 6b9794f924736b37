//! Visual theme for Govaim.

mod styles;

pub use styles::GLOBAL_STYLES;
