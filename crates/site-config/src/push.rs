//! Push channel settings.

use serde::{Deserialize, Serialize};

fn default_namespace() -> String {
    "notifications".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PushConfig {
    /// Root URL of the push server. Falls back to `api.base_url` when empty.
    #[serde(default)]
    pub url: String,

    /// Channel namespace appended to the URL path.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            namespace: default_namespace(),
        }
    }
}

impl PushConfig {
    /// Full channel endpoint, resolving an empty `url` against `api_base`.
    #[must_use]
    pub fn endpoint(&self, api_base: &str) -> String {
        let root = if self.url.is_empty() { api_base } else { &self.url };
        format!(
            "{}/{}",
            root.trim_end_matches('/'),
            self.namespace.trim_matches('/')
        )
    }
}
