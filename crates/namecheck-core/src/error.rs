//! Shared error type across namecheck crates.

use thiserror::Error;

/// Message carried by a failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "name not found";

/// Message of the fatal failure the checker escalates to.
pub const FATAL_MESSAGE: &str = "broke looking for name";

/// Stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Name is not on the allow-list.
    NameNotFound,
    /// A not-found outcome escalated by the checker.
    Fatal,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Reading config or writing output failed.
    Io,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NameNotFound => "NAME_NOT_FOUND",
            ErrorCode::Fatal => "FATAL",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NameCheckError>;

/// Unified error type used by core and runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameCheckError {
    #[error("name not found")]
    NameNotFound,
    #[error("broke looking for name")]
    Fatal,
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
}

impl NameCheckError {
    /// Map error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            NameCheckError::NameNotFound => ErrorCode::NameNotFound,
            NameCheckError::Fatal => ErrorCode::Fatal,
            NameCheckError::BadConfig(_) => ErrorCode::BadConfig,
            NameCheckError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            NameCheckError::Io(_) => ErrorCode::Io,
        }
    }
}

impl From<std::io::Error> for NameCheckError {
    fn from(e: std::io::Error) -> Self {
        NameCheckError::Io(e.to_string())
    }
}
