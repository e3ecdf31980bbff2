//! User-visible notifications.
//!
//! Controllers never talk to the presentation layer directly; they emit
//! transient toast-style notices through this trait.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Sink for transient user-visible notices.
pub trait Notifier: Send + Sync {
    /// Emits one notice.
    fn notify(&self, level: NoticeLevel, message: &str);

    /// Emits an informational notice.
    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    /// Emits a success notice.
    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    /// Emits an error notice.
    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// Discards all notices. Useful when embedding controllers somewhere no
/// user is watching.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _level: NoticeLevel, _message: &str) {}
}
