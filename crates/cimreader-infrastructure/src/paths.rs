//! Path resolution for local client state.
//!
//! All persisted client state lives under the platform config directory:
//!
//! ```text
//! ~/.config/cimreader/
//! └── session.toml    # persisted session (bearer token + user email)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for cimreader_core::CimError {
    fn from(e: PathError) -> Self {
        cimreader_core::CimError::config(e.to_string())
    }
}

/// Unified path management for the client.
pub struct CimPaths;

impl CimPaths {
    /// Returns the client configuration directory
    /// (`~/.config/cimreader` on Linux).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("cimreader"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of the persisted session file.
    pub fn session_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.toml"))
    }
}
