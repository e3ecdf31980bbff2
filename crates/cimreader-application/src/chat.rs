//! Chat session controller.
//!
//! Manages the append-only transcript for one converted document. Sends
//! are serialized: a new send is a no-op while one is in flight, which is
//! also the only ordering guarantee — answers arrive in question order
//! because concurrency is disallowed, not because responses are tagged.

use std::sync::{Arc, Mutex};

use cimreader_core::{ApiGateway, ChatMessage, CimError, Result, SessionProvider};
use tokio_util::sync::CancellationToken;

use crate::notify::Notifier;

struct ChatInner {
    transcript: Vec<ChatMessage>,
    awaiting_response: bool,
}

/// Controller for the question/answer flow of one document.
///
/// Constructed with the document id the conversion returned; without one
/// the session is inert and every send is rejected. The transcript is
/// bound to that id for the controller's whole lifetime.
pub struct ChatSession {
    gateway: Arc<dyn ApiGateway>,
    sessions: SessionProvider,
    notifier: Arc<dyn Notifier>,
    document_id: Option<String>,
    inner: Mutex<ChatInner>,
}

impl ChatSession {
    /// Creates a session for the given document.
    ///
    /// When a non-empty document title is supplied, a synthetic welcome
    /// turn is appended once, locally, without a network call.
    pub fn new(
        gateway: Arc<dyn ApiGateway>,
        sessions: SessionProvider,
        notifier: Arc<dyn Notifier>,
        document_id: Option<String>,
        document_title: Option<&str>,
    ) -> Self {
        let mut transcript = Vec::new();
        if let Some(title) = document_title.filter(|t| !t.trim().is_empty()) {
            transcript.push(ChatMessage::assistant(format!(
                "Hi! I'm your AI assistant. I've analyzed \"{title}\" and I'm ready to \
                 answer any questions you have about the document. What would you like to know?"
            )));
        }

        Self {
            gateway,
            sessions,
            notifier,
            document_id,
            inner: Mutex::new(ChatInner {
                transcript,
                awaiting_response: false,
            }),
        }
    }

    /// The bound document id, if any.
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    /// Whether sends are rejected because no document id is bound.
    pub fn is_inert(&self) -> bool {
        self.document_id.is_none()
    }

    /// A snapshot of the transcript, in insertion order.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.lock().transcript.clone()
    }

    /// Whether a send is currently in flight.
    pub fn awaiting_response(&self) -> bool {
        self.lock().awaiting_response
    }

    /// Sends one question about the bound document.
    ///
    /// No-op (zero appended turns, zero requests) when the text is
    /// empty/whitespace, when a prior send is still in flight, or when no
    /// document id is bound. Otherwise the user turn is appended
    /// optimistically before the request; on success exactly one assistant
    /// turn is appended, on failure one notice is emitted and the
    /// optimistic turn stays in place — it is never rolled back.
    pub async fn send(&self, text: &str, cancel: &CancellationToken) -> Result<()> {
        let question = text.trim();
        if question.is_empty() {
            return Ok(());
        }
        let Some(document_id) = self.document_id.clone() else {
            return Ok(());
        };
        let session = self.sessions.current().ok_or(CimError::Unauthenticated)?;

        {
            let mut inner = self.lock();
            if inner.awaiting_response {
                return Ok(());
            }
            inner.awaiting_response = true;
            inner.transcript.push(ChatMessage::user(question));
        }

        tracing::debug!(document_id = %document_id, "sending chat question");
        let outcome = self
            .gateway
            .chat_pdf(&session.access_token, question, &document_id)
            .await;

        let mut inner = self.lock();
        inner.awaiting_response = false;

        if cancel.is_cancelled() {
            // The optimistic turn stays; only the stale answer is dropped.
            tracing::debug!("chat answer discarded");
            return Err(CimError::Cancelled);
        }

        match outcome {
            Ok(answer) => {
                inner.transcript.push(ChatMessage::assistant(answer));
                Ok(())
            }
            Err(err) => {
                drop(inner);
                tracing::warn!(error = %err, "chat request failed");
                self.notifier.error("Failed to get AI response");
                Err(err)
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChatInner> {
        self.inner.lock().expect("chat state poisoned")
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("document_id", &self.document_id)
            .field("turns", &self.lock().transcript.len())
            .finish()
    }
}
