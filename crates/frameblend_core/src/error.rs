//! Error types

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or has the wrong shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the interpolator cannot use
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
