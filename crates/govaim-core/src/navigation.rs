//! Navigation capability.
//!
//! The login page never knows which router it runs under. It asks a
//! [`Navigate`] implementation to change the active route by path string;
//! the app plugs in an adapter over its router, tests plug in a
//! [`NavigationLog`].

/// Changes the active displayed route by path string.
pub trait Navigate {
    fn navigate(&mut self, path: &str);
}

impl<N: Navigate + ?Sized> Navigate for &mut N {
    fn navigate(&mut self, path: &str) {
        (**self).navigate(path);
    }
}

/// In-memory navigator that records every requested path in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationLog {
    visits: Vec<String>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requested paths, oldest first
    pub fn visits(&self) -> &[String] {
        &self.visits
    }

    /// Most recently requested path
    pub fn current(&self) -> Option<&str> {
        self.visits.last().map(String::as_str)
    }

    /// How many times `path` was requested
    pub fn count(&self, path: &str) -> usize {
        self.visits.iter().filter(|p| *p == path).count()
    }
}

impl Navigate for NavigationLog {
    fn navigate(&mut self, path: &str) {
        tracing::debug!(path, "recorded navigation");
        self.visits.push(path.to_string());
    }
}
