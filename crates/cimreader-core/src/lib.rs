//! Core domain layer of the CIM Reader client.
//!
//! Contains the data model (sessions, selected files, conversion results,
//! chat transcripts, summary records), the shared error type, the
//! observable session provider, and the [`ApiGateway`] trait that is the
//! sole network boundary. No I/O happens in this crate.

pub mod chat;
pub mod document;
pub mod error;
pub mod gateway;
pub mod session;

pub use chat::{ChatAuthor, ChatMessage};
pub use document::{ConversionResult, SelectedFile, SummaryRecord, PDF_MEDIA_TYPE};
pub use error::{CimError, Result};
pub use gateway::ApiGateway;
pub use session::{Session, SessionProvider, SubscriptionHandle};
