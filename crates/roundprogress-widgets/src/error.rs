//! Error types for roundprogress-widgets.

use thiserror::Error;

/// Errors raised while building a widget from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied.
    #[error("round progress configuration is required")]
    MissingConfiguration,

    /// YAML syntax or type error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML syntax or type error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// An unrecognised style name or code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct StyleParseError {
    /// Which style enum was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}
