//! Observable session provider.
//!
//! Holds the current session (initially none) and notifies subscribers on
//! every replacement. Subscription is explicit rather than ambient: the
//! initial value is defined, and teardown happens when the subscription
//! handle is dropped.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use super::model::Session;

/// Callback invoked with the new session value (or `None` on sign-out).
pub type SessionCallback = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

struct ProviderInner {
    current: Option<Session>,
    subscribers: HashMap<u64, SessionCallback>,
    next_subscriber_id: u64,
}

/// Single-writer holder of the current session.
///
/// Many components read the session; only the provider replaces it. The
/// session is never mutated in place.
#[derive(Clone)]
pub struct SessionProvider {
    inner: Arc<Mutex<ProviderInner>>,
}

impl SessionProvider {
    /// Creates a provider with no session.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ProviderInner {
                current: None,
                subscribers: HashMap::new(),
                next_subscriber_id: 0,
            })),
        }
    }

    /// Creates a provider seeded with an existing session (e.g. one restored
    /// from disk at startup).
    pub fn with_session(session: Session) -> Self {
        let provider = Self::new();
        provider.replace(Some(session));
        provider
    }

    /// Returns a clone of the current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.inner.lock().expect("session provider poisoned").current.clone()
    }

    /// Returns the current bearer token, if signed in.
    pub fn access_token(&self) -> Option<String> {
        self.current().map(|s| s.access_token)
    }

    /// Registers a callback invoked on every session replacement.
    ///
    /// The subscription is torn down when the returned handle is dropped.
    /// Callbacks must not call back into the provider.
    pub fn subscribe(&self, callback: SessionCallback) -> SubscriptionHandle {
        let mut inner = self.inner.lock().expect("session provider poisoned");
        let id = inner.next_subscriber_id;
        inner.next_subscriber_id += 1;
        inner.subscribers.insert(id, callback);
        SubscriptionHandle {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Replaces the current session wholesale and notifies subscribers.
    pub fn replace(&self, session: Option<Session>) {
        let callbacks: Vec<SessionCallback> = {
            let mut inner = self.inner.lock().expect("session provider poisoned");
            inner.current = session.clone();
            inner.subscribers.values().cloned().collect()
        };
        // Invoke outside the lock so a callback reading `current()` cannot
        // deadlock.
        for callback in callbacks {
            callback(session.as_ref());
        }
        tracing::debug!(signed_in = session.is_some(), "session replaced");
    }

    /// Clears the session and notifies subscribers.
    pub fn sign_out(&self) {
        self.replace(None);
    }
}

impl Default for SessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionProvider")
            .field("signed_in", &self.current().is_some())
            .finish()
    }
}

/// Removes the associated subscriber when dropped.
pub struct SubscriptionHandle {
    id: u64,
    inner: Weak<Mutex<ProviderInner>>,
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut inner) = inner.lock() {
                inner.subscribers.remove(&self.id);
            }
        }
    }
}

impl std::fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionHandle").field("id", &self.id).finish()
    }
}
