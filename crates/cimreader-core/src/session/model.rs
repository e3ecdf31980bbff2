//! Session domain model.

use serde::{Deserialize, Serialize};

/// An authenticated user session.
///
/// Issued by the external auth provider and replaced wholesale whenever it
/// changes. Components other than the provider treat it as read-only; the
/// only thing most of them need is the bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent on every authenticated request.
    pub access_token: String,
    /// Email of the signed-in user, when the provider exposed one.
    pub user_email: Option<String>,
}

impl Session {
    /// Creates a session from a bearer token and optional user email.
    pub fn new(access_token: impl Into<String>, user_email: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            user_email,
        }
    }

    /// Display name for the signed-in user.
    pub fn display_name(&self) -> &str {
        self.user_email.as_deref().unwrap_or("unknown user")
    }
}
