//! Error types for `logline`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors raised while decoding one event.
///
/// Rendering itself cannot fail: every formatter has a defined output for
/// absent or wrong-typed values. Sink failures surface as [`std::io::Error`]
/// from [`ConsoleWriter`](crate::ConsoleWriter) and are never retried here.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input bytes are not valid UTF-8.
    #[error("event is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Input is not a single well-formed JSON object.
    #[error("cannot decode event: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while assembling CLI configuration.
///
/// Maps to exit codes: any variant → exit 1 at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value (unknown color mode, unreadable file).
    #[error("configuration error: {0}")]
    Invalid(String),

    /// I/O error while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
