//! API endpoint configuration.
//!
//! The backend base URL is environment-selected: an explicit
//! `CIMREADER_API_URL` wins, otherwise the production address is used.
//! Development targets the local FastAPI server.

/// Production backend address.
pub const PRODUCTION_API_URL: &str = "https://cimreader.onrender.com";

/// Local development backend address.
pub const DEVELOPMENT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL.
pub const API_URL_ENV: &str = "CIMREADER_API_URL";

/// Resolved API endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Resolves the base URL from the environment, falling back to the
    /// production address.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url),
            _ => Self::with_base_url(PRODUCTION_API_URL),
        }
    }

    /// Configuration targeting the local development backend.
    pub fn development() -> Self {
        Self::with_base_url(DEVELOPMENT_API_URL)
    }

    /// Configuration with an explicit base URL. A trailing slash is
    /// stripped so endpoint joining stays uniform.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a full URL for an endpoint path. A leading slash on the
    /// endpoint is tolerated.
    pub fn endpoint(&self, path: &str) -> String {
        let clean = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = ApiConfig::with_base_url("http://localhost:8000");
        assert_eq!(
            config.endpoint("convert-pdf"),
            "http://localhost:8000/convert-pdf"
        );
        assert_eq!(
            config.endpoint("/summaries"),
            "http://localhost:8000/summaries"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::with_base_url("https://cimreader.onrender.com/");
        assert_eq!(config.base_url(), "https://cimreader.onrender.com");
        assert_eq!(
            config.endpoint("chat-pdf"),
            "https://cimreader.onrender.com/chat-pdf"
        );
    }

    #[test]
    fn development_targets_localhost() {
        assert_eq!(ApiConfig::development().base_url(), DEVELOPMENT_API_URL);
    }
}
