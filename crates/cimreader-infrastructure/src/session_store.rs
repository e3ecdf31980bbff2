//! Persisted session storage.
//!
//! Keeps the issued session in `~/.config/cimreader/session.toml` so a
//! sign-in survives process restarts. The file holds the bearer token in
//! plaintext, so it should carry restrictive permissions.
//!
//! Tokens are never logged.

use cimreader_core::{Result, Session};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths::CimPaths;
use crate::storage::AtomicTomlFile;

/// On-disk representation of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSession {
    access_token: String,
    #[serde(default)]
    user_email: Option<String>,
    /// When the session was stored, RFC 3339. Informational only.
    saved_at: String,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            access_token: session.access_token.clone(),
            user_email: session.user_email.clone(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl From<PersistedSession> for Session {
    fn from(persisted: PersistedSession) -> Self {
        Session {
            access_token: persisted.access_token,
            user_email: persisted.user_email,
        }
    }
}

/// Stores the current session on disk.
///
/// Read on startup to seed the session provider; written on sign-in;
/// removed on sign-out.
#[derive(Debug)]
pub struct SessionStore {
    file: AtomicTomlFile<PersistedSession>,
}

impl SessionStore {
    /// Creates a store at the default path
    /// (`~/.config/cimreader/session.toml`).
    pub fn new() -> Result<Self> {
        let path = CimPaths::session_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a store at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Loads the persisted session, if one exists.
    pub fn load(&self) -> Result<Option<Session>> {
        let persisted = self.file.load()?;
        Ok(persisted.map(Session::from))
    }

    /// Persists the session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        self.file.save(&PersistedSession::from(session))?;
        tracing::debug!("session persisted");
        Ok(())
    }

    /// Removes the persisted session. Safe to call when none exists.
    pub fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!("persisted session cleared");
        Ok(())
    }
}
