use std::io;
use std::str;

use thiserror::Error;

/// Errors that can occur while stringifying a query string.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value was rejected before any output was produced.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input contains a shape that has no query string representation,
    /// e.g. a nested map or a sequence inside a sequence.
    #[error("unsupported input: {0}")]
    Unsupported(&'static str),

    /// Custom error raised by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Utf8(#[from] str::Utf8Error),
}

impl Error {
    /// Generate the error raised for a separator that is not exactly one
    /// character long.
    pub(crate) fn invalid_separator(separator: &str) -> Self {
        Error::InvalidArgument(format!(
            "array format separator must be a single character, got {separator:?}"
        ))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
