/*!
 * Error types for the subvocab application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the translation API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// Status code reported in the response body or HTTP layer
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while loading or persisting the vocabulary database
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file could not be read
    #[error("Failed to read database file {path}: {source}")]
    ReadFailed {
        /// Path that was being read
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The database file content is not valid JSON
    #[error("Failed to parse database file {path}: {source}")]
    ParseFailed {
        /// Path that was being parsed
        path: String,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// The database file could not be written
    #[error("Failed to write database file {path}: {source}")]
    WriteFailed {
        /// Path that was being written
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the vocabulary database
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
