//! Shared wiring for all commands.

use std::sync::Arc;

use anyhow::Result;
use cimreader_application::Notifier;
use cimreader_core::{ApiGateway, SessionProvider};
use cimreader_infrastructure::{ApiConfig, SessionStore};
use cimreader_interaction::ApiClient;

use crate::notifier::StderrNotifier;

/// Everything a command needs: the session provider (seeded from disk),
/// the persisted session store, the API gateway, and the notice sink.
pub struct AppContext {
    pub sessions: SessionProvider,
    pub store: SessionStore,
    pub gateway: Arc<dyn ApiGateway>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Builds the context, restoring any persisted session.
    pub fn new(dev: bool) -> Result<Self> {
        let store = SessionStore::new()?;
        let sessions = match store.load()? {
            Some(session) => SessionProvider::with_session(session),
            None => SessionProvider::new(),
        };

        let config = if dev {
            ApiConfig::development()
        } else {
            ApiConfig::from_env()
        };
        tracing::debug!(base_url = config.base_url(), "backend selected");

        Ok(Self {
            sessions,
            store,
            gateway: Arc::new(ApiClient::new(config)),
            notifier: Arc::new(StderrNotifier),
        })
    }
}
