//! Error types for the calculator and its configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when input cannot be mapped onto a calculator operation.
///
/// Arithmetic never fails: division by zero and similar anomalies show up as
/// `Infinity` or `NaN` on the display instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid digit {0}, expected 0-9")]
    InvalidDigit(u8),

    #[error("invalid operator {0:?}")]
    InvalidOperator(String),

    #[error("unknown key {0:?}")]
    UnknownKey(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to encode snapshot: {0}")]
    Encode(String),
}

/// Errors raised while loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
