//! REST API connection settings.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    concat!("siteline/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the dashboard API, e.g. `https://api.example.com/v1`.
    #[serde(default)]
    pub base_url: String,

    /// Bearer token attached to every request. Empty means unauthenticated.
    #[serde(default)]
    pub token: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Check if the API base URL is set.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
