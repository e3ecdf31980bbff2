//! Terminal notice sink.

use cimreader_application::{NoticeLevel, Notifier};

/// Prints controller notices to stderr, keeping stdout for command output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let prefix = match level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        eprintln!("[{prefix}] {message}");
    }
}
