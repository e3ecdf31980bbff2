//! Reqwest implementation of the API gateway.

use async_trait::async_trait;
use cimreader_core::{ApiGateway, CimError, ConversionResult, Result, SelectedFile, SummaryRecord};
use cimreader_infrastructure::ApiConfig;
use reqwest::multipart;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::response::{ChatResponse, ConvertResponse, ErrorBody, ListSummariesResponse};

/// HTTP client for the backend API.
///
/// Stateless apart from the connection pool: the bearer token is passed per
/// call, and no timeouts are configured beyond the transport's defaults.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a client against the given endpoint configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a client against the environment-selected endpoint.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// The endpoint configuration in use.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::expect_success(response).await?;
        response
            .json()
            .await
            .map_err(|err| CimError::network(format!("Failed to parse response: {err}")))
    }

    async fn expect_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "request rejected by server");
        Err(CimError::api(
            status.as_u16(),
            error_message_from_body(status, &body),
        ))
    }
}

/// Extracts the most useful human-readable message from an error body.
///
/// Preference order: structured `detail` field, raw body text, generic
/// status fallback.
fn error_message_from_body(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail {
            if !detail.trim().is_empty() {
                return detail;
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    format!("Request failed with status {}", status.as_u16())
}

#[async_trait]
impl ApiGateway for ApiClient {
    async fn convert_pdf(&self, token: &str, file: &SelectedFile) -> Result<ConversionResult> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(|err| CimError::validation(format!("Invalid media type: {err}")))?;
        let form = multipart::Form::new().part("file", part);

        tracing::info!(file = %file.name, "uploading file for conversion");
        let response = self
            .client
            .post(self.config.endpoint("convert-pdf"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|err| CimError::network(format!("Upload failed: {err}")))?;

        let parsed: ConvertResponse = Self::expect_json(response).await?;
        Ok(parsed.into())
    }

    async fn chat_pdf(&self, token: &str, question: &str, document_id: &str) -> Result<String> {
        let body = json!({
            "question": question,
            "document_id": document_id,
        });

        let response = self
            .client
            .post(self.config.endpoint("chat-pdf"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|err| CimError::network(format!("Chat request failed: {err}")))?;

        let parsed: ChatResponse = Self::expect_json(response).await?;
        Ok(parsed.answer)
    }

    async fn list_summaries(&self, token: &str) -> Result<Vec<SummaryRecord>> {
        let response = self
            .client
            .get(self.config.endpoint("summaries"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| CimError::network(format!("Failed to fetch summaries: {err}")))?;

        let parsed: ListSummariesResponse = Self::expect_json(response).await?;
        Ok(parsed.into_records())
    }

    async fn delete_summary(&self, token: &str, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.config.endpoint(&format!("summaries/{id}")))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| CimError::network(format!("Failed to delete summary: {err}")))?;

        Self::expect_success(response).await?;
        Ok(())
    }
}
