//! Error types for the Traceix client.
//!
//! This module provides structured, typed errors for all failure scenarios.
//! The library never panics; all errors are returned as `Result` values.
//!
//! Argument-validation failures (`NoUuidProvided`, `InvalidSearchType`) are
//! raised before any request is issued and can be told apart from transport
//! failures with [`ClientError::is_validation`].

use thiserror::Error;

/// The main error type for client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No usable API key: none was passed and `TRACEIX_API_KEY` is unset or empty.
    #[error("no API key was provided and TRACEIX_API_KEY is not set")]
    NoApiKey,

    /// The status endpoint requires a UUID and none was given.
    #[error("no UUID was provided for the status endpoint")]
    NoUuidProvided,

    /// The search type string is not one of the supported kinds.
    #[error("invalid search type '{value}': must be 'capa' or 'exif'")]
    InvalidSearchType {
        /// The rejected input value.
        value: String,
    },

    /// The local file could not be opened for upload.
    #[error("cannot read file '{path}': {source}")]
    FileUnreadable {
        /// Path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The request failed in transport or the service returned a non-success
    /// status. The two are not distinguished at this layer.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The HTTP client itself could not be set up.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal failure.
        message: String,
    },
}

impl ClientError {
    /// Returns `true` if this error was raised by client-side argument
    /// validation, before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoApiKey | Self::NoUuidProvided | Self::InvalidSearchType { .. }
        )
    }

    /// Creates an `InvalidSearchType` error.
    pub fn invalid_search_type(value: impl Into<String>) -> Self {
        Self::InvalidSearchType {
            value: value.into(),
        }
    }

    /// Creates a `FileUnreadable` error.
    pub fn file_unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Creates an `Internal` error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// A specialized `Result` type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
