//! The network boundary, as a trait.
//!
//! The controllers depend on this trait rather than on a concrete HTTP
//! client, which keeps the application layer transport-agnostic and makes
//! the controllers testable against in-memory fakes.

use crate::document::{ConversionResult, SelectedFile, SummaryRecord};
use crate::error::Result;

/// The four REST calls the client issues against the backend.
///
/// Every method takes the bearer token explicitly; the gateway holds no
/// session state of its own. Implementations translate non-2xx responses
/// into [`CimError::Api`](crate::CimError::Api) with the best message they
/// can extract from the error body.
#[async_trait::async_trait]
pub trait ApiGateway: Send + Sync {
    /// Uploads a PDF for conversion. Returns the artifact location and the
    /// document id for subsequent chat calls.
    async fn convert_pdf(&self, token: &str, file: &SelectedFile) -> Result<ConversionResult>;

    /// Asks one question about a converted document. Returns the answer text.
    async fn chat_pdf(&self, token: &str, question: &str, document_id: &str) -> Result<String>;

    /// Lists the caller's previously generated summaries.
    async fn list_summaries(&self, token: &str) -> Result<Vec<SummaryRecord>>;

    /// Deletes one summary record. The response body is ignored.
    async fn delete_summary(&self, token: &str, id: &str) -> Result<()>;
}
