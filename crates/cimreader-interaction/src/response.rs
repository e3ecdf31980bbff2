//! Wire types for the backend API.

use cimreader_core::{ConversionResult, SummaryRecord};
use serde::Deserialize;

/// Success body of `POST /convert-pdf`.
#[derive(Debug, Deserialize)]
pub(crate) struct ConvertResponse {
    pub public_url: String,
    pub summary_id: String,
}

impl From<ConvertResponse> for ConversionResult {
    fn from(response: ConvertResponse) -> Self {
        ConversionResult {
            artifact_url: response.public_url,
            document_id: response.summary_id,
        }
    }
}

/// Success body of `POST /chat-pdf`.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub answer: String,
}

/// One record as the server lists it.
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub summary_pdf_url: String,
}

impl From<SummaryDto> for SummaryRecord {
    fn from(dto: SummaryDto) -> Self {
        SummaryRecord {
            id: dto.id,
            title: dto.title,
            created_at: dto.created_at,
            artifact_url: dto.summary_pdf_url,
        }
    }
}

/// Body of `GET /summaries`.
///
/// Two shapes have been observed: a bare array of records and an object
/// wrapping the array under a `summaries` key. Accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListSummariesResponse {
    Bare(Vec<SummaryDto>),
    Wrapped { summaries: Vec<SummaryDto> },
}

impl ListSummariesResponse {
    pub fn into_records(self) -> Vec<SummaryRecord> {
        let dtos = match self {
            ListSummariesResponse::Bare(dtos) => dtos,
            ListSummariesResponse::Wrapped { summaries } => summaries,
        };
        dtos.into_iter().map(SummaryRecord::from).collect()
    }
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
