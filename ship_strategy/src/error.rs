//! Errors raised while building ships from configuration.

use thiserror::Error;

/// Result alias for ship configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse ship configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("ship name must not be blank")]
    BlankName,

    #[error("fleet configuration contains no ships")]
    EmptyFleet,
}
