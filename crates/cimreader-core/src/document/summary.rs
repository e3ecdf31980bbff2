//! Conversion results and history records.

use serde::{Deserialize, Serialize};

/// The outcome of one successful upload-and-convert call.
///
/// Immutable once created; discarded when a new file is selected. The
/// document id is the correlation key for all subsequent chat requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// URL of the generated summary PDF.
    pub artifact_url: String,
    /// Opaque id correlating this result with chat requests.
    pub document_id: String,
}

/// One previously generated summary, as listed by the server.
///
/// Server-owned; the client keeps a read-through cached list and removes an
/// entry only after the server confirmed its deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Server-assigned record id.
    pub id: String,
    /// Human-readable title, usually the original file name.
    pub title: String,
    /// Creation time (RFC 3339) when the server reported one.
    pub created_at: Option<String>,
    /// URL of the stored summary PDF.
    pub artifact_url: String,
}
