//! # site-api
//!
//! HTTP client for the dashboard REST API:
//! - per-column task listings with filters and pagination
//! - task status updates and deletion
//! - project list for the board filter
//! - notification, drawing, and submittal views refetched on push events

pub mod projects;
pub mod tasks;
pub mod views;

mod error;
mod http;

pub use error::ApiError;

use site_config::ApiConfig;
use std::time::Duration;

/// Client for the dashboard API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let token = (!config.token.is_empty()).then(|| config.token.clone());
        Ok(Self {
            http,
            base_url: config.base().to_string(),
            token,
        })
    }

    /// Client against an arbitrary base URL with default settings.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let config = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        Self::new(&config)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request to `path` (leading slash included), attaching the bearer token.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
