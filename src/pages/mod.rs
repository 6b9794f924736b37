//! Page components for Govaim.

mod dashboard;
mod login;
mod not_found;
mod register;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
