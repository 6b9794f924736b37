//! Route paths used by the login page.
//!
//! Paths are literal strings without parameters. The app's routing table
//! mounts a page at each of them.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Pages the login page can reach, plus the login page itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppPath {
    /// `/auth/login`
    Login,
    /// `/auth/register`
    Register,
    /// `/dashboard`
    Dashboard,
}

impl AppPath {
    pub const LOGIN: &'static str = "/auth/login";
    pub const REGISTER: &'static str = "/auth/register";
    pub const DASHBOARD: &'static str = "/dashboard";

    /// Literal path string for this page
    pub fn as_str(&self) -> &'static str {
        match self {
            AppPath::Login => Self::LOGIN,
            AppPath::Register => Self::REGISTER,
            AppPath::Dashboard => Self::DASHBOARD,
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppPath {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            Self::LOGIN => Ok(AppPath::Login),
            Self::REGISTER => Ok(AppPath::Register),
            Self::DASHBOARD => Ok(AppPath::Dashboard),
            other => Err(CoreError::UnknownPath(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_strings() {
        assert_eq!(AppPath::Login.as_str(), "/auth/login");
        assert_eq!(AppPath::Register.as_str(), "/auth/register");
        assert_eq!(AppPath::Dashboard.as_str(), "/dashboard");
        assert_eq!(AppPath::Dashboard.to_string(), "/dashboard");
    }

    #[test]
    fn parses_known_paths() {
        assert_eq!("/auth/register".parse::<AppPath>(), Ok(AppPath::Register));
        assert_eq!("/dashboard".parse::<AppPath>(), Ok(AppPath::Dashboard));
    }

    #[test]
    fn rejects_unknown_paths() {
        let err = "/dashboard/".parse::<AppPath>().unwrap_err();
        assert_eq!(err, CoreError::UnknownPath("/dashboard/".to_string()));
        assert_eq!(err.to_string(), "Unknown path: /dashboard/");
    }
}
