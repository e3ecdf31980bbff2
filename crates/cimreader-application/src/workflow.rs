//! Conversion workflow controller.
//!
//! Orchestrates the upload → convert → ready flow for one document:
//! file selection with media-type validation, a single-flight convert call,
//! and the hand-off to a chat session bound to the returned document id.

use std::sync::{Arc, Mutex};

use cimreader_core::{
    ApiGateway, CimError, ConversionResult, Result, SelectedFile, SessionProvider,
};
use tokio_util::sync::CancellationToken;

use crate::chat::ChatSession;
use crate::notify::Notifier;

/// Lifecycle of one conversion.
///
/// `Idle → Selected → Converting → Ready`, back to `Selected` on failure
/// and to `Selected`/`Idle` on re-selection. Single flight is enforced by
/// the state machine: `convert` is only valid in `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// No file chosen.
    Idle,
    /// A file is chosen but not yet sent.
    Selected,
    /// The upload request is in flight.
    Converting,
    /// A conversion result is available.
    Ready,
}

struct WorkflowInner {
    state: WorkflowState,
    file: Option<SelectedFile>,
    result: Option<ConversionResult>,
    /// Title of the converted document (the uploaded file's name), kept
    /// for the chat hand-off after the file itself is invalidated.
    document_title: Option<String>,
}

/// Controller for the upload-and-convert flow.
///
/// Owns the selected file and the conversion result; presentation code
/// reads state through the accessors and never mutates it.
pub struct ConversionWorkflow {
    gateway: Arc<dyn ApiGateway>,
    sessions: SessionProvider,
    notifier: Arc<dyn Notifier>,
    inner: Mutex<WorkflowInner>,
}

impl ConversionWorkflow {
    /// Creates a workflow in `Idle`.
    pub fn new(
        gateway: Arc<dyn ApiGateway>,
        sessions: SessionProvider,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gateway,
            sessions,
            notifier,
            inner: Mutex::new(WorkflowInner {
                state: WorkflowState::Idle,
                file: None,
                result: None,
                document_title: None,
            }),
        }
    }

    /// Accepts a candidate file.
    ///
    /// Only `application/pdf` is accepted; on rejection a notice is emitted
    /// and state is left unchanged. On acceptance any prior conversion
    /// result is dropped and the workflow moves to `Selected`.
    pub fn select_file(&self, candidate: SelectedFile) -> Result<()> {
        if !candidate.is_pdf() {
            self.notifier.error("Please upload a PDF file");
            return Err(CimError::validation("Please upload a PDF file"));
        }

        let mut inner = self.lock();
        tracing::debug!(file = %candidate.name, "file selected");
        inner.file = Some(candidate);
        inner.result = None;
        inner.document_title = None;
        inner.state = WorkflowState::Selected;
        Ok(())
    }

    /// Uploads the selected file and stores the conversion result.
    ///
    /// Valid only in `Selected` and with an active session; the session
    /// check happens before any request is issued and the resulting
    /// `Unauthenticated` error is left to the caller to surface. Exactly
    /// one upload request is issued; there are no automatic retries. On
    /// failure the workflow reverts to `Selected` and the extracted error
    /// message is emitted as a notice.
    ///
    /// A `cancel` token cancelled while the request is in flight makes the
    /// response be discarded without being applied.
    pub async fn convert(&self, cancel: &CancellationToken) -> Result<ConversionResult> {
        let session = self.sessions.current().ok_or(CimError::Unauthenticated)?;

        let file = {
            let mut inner = self.lock();
            match inner.state {
                WorkflowState::Converting => {
                    // Second trigger while in flight: rejected without side
                    // effects.
                    return Err(CimError::validation("A conversion is already in progress"));
                }
                WorkflowState::Idle | WorkflowState::Ready => {
                    return Err(CimError::validation("No file selected"));
                }
                WorkflowState::Selected => {}
            }
            let file = inner
                .file
                .clone()
                .ok_or_else(|| CimError::internal("Selected state without a file"))?;
            inner.state = WorkflowState::Converting;
            file
        };

        let outcome = self.gateway.convert_pdf(&session.access_token, &file).await;

        let notice = {
            let mut inner = self.lock();

            // A re-selection during the flight already moved the state on;
            // the response is stale either way.
            if cancel.is_cancelled() || inner.state != WorkflowState::Converting {
                if inner.state == WorkflowState::Converting {
                    inner.state = WorkflowState::Selected;
                }
                tracing::debug!("conversion result discarded");
                return Err(CimError::Cancelled);
            }

            match outcome {
                Ok(result) => {
                    inner.document_title = inner.file.take().map(|f| f.name);
                    inner.result = Some(result.clone());
                    inner.state = WorkflowState::Ready;
                    drop(inner);
                    self.notifier.success("PDF converted successfully!");
                    return Ok(result);
                }
                Err(err) => {
                    inner.state = WorkflowState::Selected;
                    let message = match &err {
                        CimError::Api { message, .. } => message.clone(),
                        other => other.to_string(),
                    };
                    (message, err)
                }
            }
        };

        let (message, err) = notice;
        tracing::warn!(error = %err, "conversion failed");
        self.notifier.error(&message);
        Err(err)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WorkflowState {
        self.lock().state
    }

    /// Name of the currently selected file, if any.
    pub fn selected_file_name(&self) -> Option<String> {
        self.lock().file.as_ref().map(|f| f.name.clone())
    }

    /// The conversion result, available in `Ready`.
    pub fn result(&self) -> Option<ConversionResult> {
        self.lock().result.clone()
    }

    /// Title of the converted document, available in `Ready`.
    pub fn document_title(&self) -> Option<String> {
        self.lock().document_title.clone()
    }

    /// Binds a chat session to the conversion result.
    ///
    /// Returns `None` unless a result exists: a transcript may only be
    /// created after a conversion result, and stays bound to that result's
    /// document id for its lifetime.
    pub fn bind_chat(&self) -> Option<ChatSession> {
        let (document_id, title) = {
            let inner = self.lock();
            let result = inner.result.as_ref()?;
            (result.document_id.clone(), inner.document_title.clone())
        };
        Some(ChatSession::new(
            self.gateway.clone(),
            self.sessions.clone(),
            self.notifier.clone(),
            Some(document_id),
            title.as_deref(),
        ))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WorkflowInner> {
        self.inner.lock().expect("workflow state poisoned")
    }
}

impl std::fmt::Debug for ConversionWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionWorkflow")
            .field("state", &self.state())
            .finish()
    }
}
