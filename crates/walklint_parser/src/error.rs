//! Parse error types.

use thiserror::Error;

/// Errors that can occur while parsing a walkthrough document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text could not be parsed as markdown.
    #[error("Invalid source: {message}")]
    InvalidSource {
        /// Error message from the markdown parser.
        message: String,
    },

    /// An internal adapter error occurred.
    #[error("Internal parser error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Creates a new invalid source error.
    pub fn invalid_source(message: impl Into<String>) -> Self {
        Self::InvalidSource {
            message: message.into(),
        }
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
