//! Start-path routing
//!
//! The directory lives at `/`. Any other path lands on the not-found view.

use tracing::error;

/// Path of the directory view
pub const DIRECTORY_PATH: &str = "/";

/// Which top-level view a path selects
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Directory,
    NotFound(String),
}

impl Route {
    /// Resolve a requested path. Unknown paths are logged at error level.
    pub fn resolve(path: &str) -> Self {
        if path == DIRECTORY_PATH {
            return Self::Directory;
        }
        error!(path, "404 Error: User attempted to access non-existent route");
        Self::NotFound(path.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
