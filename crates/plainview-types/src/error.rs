//! Error types for plainview.

use std::io;
use std::path::PathBuf;

/// Errors produced while resolving, fetching, or rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum PlainviewError {
    /// The locator string has no recognized scheme or a broken host/port.
    #[error("malformed locator: {0}")]
    MalformedLocator(String),

    /// A `file` locator points at something that is not a regular file.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The response declares an encoding the transport does not decode.
    #[error("unsupported response: {0}")]
    UnsupportedResponse(String),

    /// The response could not be parsed as HTTP/1.1.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl PlainviewError {
    /// Convert into an [`io::Error`], keeping the original error (and its
    /// kind) when this is the `Io` variant.
    pub fn into_io_error(self) -> io::Error {
        match self {
            PlainviewError::Io(io_err) => io_err,
            other => io::Error::other(other.to_string()),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PlainviewError>;
