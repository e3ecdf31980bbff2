//! Application layer: the controllers that orchestrate the client's flows.
//!
//! - [`ConversionWorkflow`] — upload → convert → ready, with the chat
//!   hand-off.
//! - [`ChatSession`] — serialized question/answer transcript for one
//!   document.
//! - [`HistoryList`] — read-through cache of previously generated
//!   summaries.
//!
//! Controllers own their state, read the session through the provider,
//! and reach the network only through the [`ApiGateway`](cimreader_core::ApiGateway)
//! trait. User-visible feedback goes through [`Notifier`].

mod chat;
mod history;
mod notify;
mod workflow;

pub use chat::ChatSession;
pub use history::HistoryList;
pub use notify::{NoticeLevel, Notifier, NullNotifier};
pub use workflow::{ConversionWorkflow, WorkflowState};
