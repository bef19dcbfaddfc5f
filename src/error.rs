// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Favorites(String),
    Share(ShareError),
}

/// Failures of the share path (native share sheet or clipboard fallback).
///
/// These are logged and never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The system clipboard could not be opened or written.
    Clipboard(String),

    /// The native share sheet reported a failure.
    ShareSheet(String),

    /// The user dismissed the share sheet.
    Cancelled,

    /// The background share task did not complete.
    Interrupted(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Clipboard(msg) => write!(f, "clipboard unavailable: {}", msg),
            ShareError::ShareSheet(msg) => write!(f, "share sheet failed: {}", msg),
            ShareError::Cancelled => write!(f, "share cancelled"),
            ShareError::Interrupted(msg) => write!(f, "share task interrupted: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Favorites(e) => write!(f, "Favorites Error: {}", e),
            Error::Share(e) => write!(f, "Share Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ShareError> for Error {
    fn from(err: ShareError) -> Self {
        Error::Share(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Favorites(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
