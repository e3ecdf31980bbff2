//! Chat transcript types.

use serde::{Deserialize, Serialize};

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatAuthor {
    /// A question typed by the user.
    User,
    /// An answer from the assistant (including the local welcome turn).
    Assistant,
}

/// A single turn in a chat transcript.
///
/// Transcripts are append-only and insertion-ordered; each message carries
/// its own id and timestamp so the presentation layer never has to invent
/// either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Locally generated message id.
    pub id: String,
    /// Message text.
    pub content: String,
    /// Author of the turn.
    pub author: ChatAuthor,
    /// Creation time, RFC 3339.
    pub timestamp: String,
}

impl ChatMessage {
    fn new(content: impl Into<String>, author: ChatAuthor) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            author,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, ChatAuthor::User)
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, ChatAuthor::Assistant)
    }

    /// Whether the turn came from the user.
    pub fn is_user(&self) -> bool {
        self.author == ChatAuthor::User
    }
}
