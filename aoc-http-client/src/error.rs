//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl AocError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            AocError::InvalidStatus { status } => Some(*status),
            AocError::Request(e) => e.status(),
            _ => None,
        }
    }
}
