//! # site-config
//!
//! Layered configuration loading for siteline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SITELINE_*` prefix, `__` as separator)
//! 2. Project-level `.siteline/config.toml`
//! 3. User-level `~/.config/siteline/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `SITELINE_API__BASE_URL` -> `api.base_url`,
//! `SITELINE_BOARD__PAGE_SIZE` -> `board.page_size`, etc.
//!
//! ```no_run
//! use site_config::SitelineConfig;
//!
//! let config = SitelineConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("API: {}", config.api.base());
//! }
//! ```

mod api;
mod board;
mod error;
mod general;
mod push;

pub use api::ApiConfig;
pub use board::BoardConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use push::PushConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SitelineConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub push: PushConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SitelineConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the working
    /// directory (or its nearest ancestor).
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".siteline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SITELINE_").split("__"))
    }

    /// Fail unless the API section carries a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for an empty `api.base_url`.
    pub fn require_api(&self) -> Result<&ApiConfig, ConfigError> {
        if self.api.is_configured() {
            Ok(&self.api)
        } else {
            Err(ConfigError::NotConfigured {
                section: "api".to_string(),
            })
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.board.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "board.page_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("siteline").join("config.toml"))
    }
}
