//! Error types for the og-card library.
//!
//! Rendering itself is infallible; these cover the surfaces around it
//! (configuration loading and request decoding).

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid request: {0}")]
    Request(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while loading a [`CardConfig`](crate::CardConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(String),

    #[error("Invalid value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}
