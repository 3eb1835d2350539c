//! Errors raised while loading or checking configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `CAMPUS_*` variable could not be read into the config.
    #[error("failed to read campus configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A `.env` file exists but is malformed.
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    /// A field parsed fine but its value cannot work.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
