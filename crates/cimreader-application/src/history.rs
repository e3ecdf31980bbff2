//! History list controller.
//!
//! Read-through cache of the server's summary records. Unlike the chat
//! transcript's optimistic append, deletions here are confirmed-only: a
//! record leaves the local list only after the server acknowledged the
//! delete. The asymmetry is deliberate and preserved.

use std::sync::{Arc, Mutex};

use cimreader_core::{ApiGateway, CimError, Result, SessionProvider, SummaryRecord};
use tokio_util::sync::CancellationToken;

use crate::notify::Notifier;

/// Controller for the list of previously generated summaries.
pub struct HistoryList {
    gateway: Arc<dyn ApiGateway>,
    sessions: SessionProvider,
    notifier: Arc<dyn Notifier>,
    records: Mutex<Vec<SummaryRecord>>,
}

impl HistoryList {
    /// Creates an empty history list.
    pub fn new(
        gateway: Arc<dyn ApiGateway>,
        sessions: SessionProvider,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gateway,
            sessions,
            notifier,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Fetches the record list from the server.
    ///
    /// Requires an active session. On success the local collection is
    /// replaced wholesale; on failure a notice is emitted and the
    /// collection is left as it was.
    pub async fn load(&self, cancel: &CancellationToken) -> Result<()> {
        let session = self.sessions.current().ok_or(CimError::Unauthenticated)?;

        match self.gateway.list_summaries(&session.access_token).await {
            Ok(records) => {
                if cancel.is_cancelled() {
                    tracing::debug!("summary list discarded");
                    return Err(CimError::Cancelled);
                }
                tracing::debug!(count = records.len(), "summaries loaded");
                *self.lock() = records;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load summaries");
                self.notifier.error("Failed to fetch summaries");
                Err(err)
            }
        }
    }

    /// Deletes one record on the server, then removes it locally.
    ///
    /// No optimistic removal: the local entry is only dropped after an
    /// HTTP success. On failure a notice is emitted and the collection's
    /// membership is unchanged.
    pub async fn remove(&self, id: &str, cancel: &CancellationToken) -> Result<()> {
        let session = self.sessions.current().ok_or(CimError::Unauthenticated)?;

        match self.gateway.delete_summary(&session.access_token, id).await {
            Ok(()) => {
                if cancel.is_cancelled() {
                    return Err(CimError::Cancelled);
                }
                self.lock().retain(|record| record.id != id);
                tracing::debug!(id = %id, "summary deleted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "failed to delete summary");
                self.notifier.error("Failed to delete summary");
                Err(err)
            }
        }
    }

    /// A snapshot of the cached records.
    pub fn records(&self) -> Vec<SummaryRecord> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SummaryRecord>> {
        self.records.lock().expect("history state poisoned")
    }
}

impl std::fmt::Debug for HistoryList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryList")
            .field("records", &self.lock().len())
            .finish()
    }
}
