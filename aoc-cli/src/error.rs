//! Error types for the CLI

use aoc_scaffold::ScaffoldError;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Scaffold generation failed
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    /// Tracing subscriber could not be installed
    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    /// Terminal output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// The single line shown to the user on failure
    pub fn user_message(&self) -> String {
        match self {
            CliError::Scaffold(e) => e.user_message(),
            other => other.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CliError::Scaffold(e) if e.is_cancelled())
    }
}
