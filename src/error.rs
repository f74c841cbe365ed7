//! Error types for query decoding and configuration loading.

use thiserror::Error;

/// Errors that can occur while decoding query strings or loading configuration.
///
/// URL decomposition itself never fails on odd-but-scannable input; the only
/// failure inside parsing is a query value whose percent escapes are broken.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteUrlError {
    /// A `%` was not followed by two hexadecimal digits.
    #[error("Malformed percent escape at byte {position} in {input:?}")]
    MalformedEscape {
        /// The raw value that failed to decode.
        input: String,
        /// Byte offset of the offending `%`.
        position: usize,
    },

    /// The percent-decoded bytes are not valid UTF-8.
    #[error("Percent-decoded value is not valid UTF-8: {0:?}")]
    InvalidUtf8(String),

    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {message}")]
    ConfigRead {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// The configuration file is not valid TOML for [`crate::RouteConfig`].
    #[error("Invalid config: {0}")]
    ConfigParse(String),

    /// The XDG base directories could not be resolved.
    #[error("Config directory lookup failed: {0}")]
    ConfigDir(String),
}

impl From<toml::de::Error> for RouteUrlError {
    fn from(err: toml::de::Error) -> Self {
        RouteUrlError::ConfigParse(err.to_string())
    }
}
