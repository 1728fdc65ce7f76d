use thiserror::Error;

/// Why siteline could not build a usable [`crate::SitelineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `SITELINE_*` variable could not be parsed into the schema.
    #[error("cannot read siteline settings: {0}")]
    Figment(#[from] figment::Error),

    /// `section` lacks a value the command needs, such as `api.base_url`.
    #[error(
        "siteline [{section}] settings are incomplete; set them in .siteline/config.toml or via SITELINE_{}__* variables",
        .section.to_uppercase()
    )]
    NotConfigured { section: String },

    #[error("bad siteline setting {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
