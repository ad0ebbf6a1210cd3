use crate::config::Config;
use crate::models::{comment::RawComment, error::AppError};
use serde::Deserialize;
use std::future::Future;

/// Anything that can produce the full list of scored comments.
pub trait CommentSource {
    /// Fetches every comment record, in source order. Individual records are
    /// returned unvalidated; transport and payload errors fail the whole call.
    fn fetch_comments(&self) -> impl Future<Output = Result<Vec<RawComment>, AppError>>;
}

// API CONFIGURATION
/// Configuration for the comment API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    comments_path: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Constructs the full URL of the comment listing.
    pub fn comments_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.comments_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    comments_path: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the path of the comment listing, relative to the base URL.
    pub fn comments_path(mut self, path: impl Into<String>) -> Self {
        self.comments_path = Some(path.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::DEFAULT_API_BASE_URL.to_string()),
            comments_path: self
                .comments_path
                .unwrap_or_else(|| Config::COMMENTS_PATH.to_string()),
        }
    }
}

// API RESPONSE TYPES
/// The listing is either a bare array or wrapped in `results`/`data`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ApiResponse {
    List(Vec<serde_json::Value>),
    Wrapped {
        #[serde(alias = "data")]
        results: Vec<serde_json::Value>,
    },
}

impl ApiResponse {
    fn into_records(self) -> Vec<RawComment> {
        let values = match self {
            Self::List(values) | Self::Wrapped { results: values } => values,
        };

        // A record of the wrong shape becomes an empty record, which fails
        // validation and is counted as rejected by the store.
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap_or_default())
            .collect()
    }
}

/// Parses a comment listing payload.
pub fn parse_comments(body: &str) -> Result<Vec<RawComment>, AppError> {
    serde_json::from_str::<ApiResponse>(body)
        .map(ApiResponse::into_records)
        .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
}

// COMMENT CLIENT
/// HTTP client for the comment API.
pub struct CommentClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CommentClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl CommentSource for CommentClient {
    async fn fetch_comments(&self) -> Result<Vec<RawComment>, AppError> {
        let url = self.config.comments_url();

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response: {e}")))?;

        parse_comments(&body)
    }
}
