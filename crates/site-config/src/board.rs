//! Task board settings.

use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Tasks requested per column page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
