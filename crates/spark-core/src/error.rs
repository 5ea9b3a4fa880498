//! Error types for Spark

use thiserror::Error;

/// Result type alias using Spark's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Spark error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Entity errors (E001-E099)
    #[error("Agent '{0}' not found. Run `spark agents list` to see the catalog.")]
    AgentNotFound(String),

    // Input errors (E100-E199)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is empty")]
    MissingField(&'static str),

    // Config errors (E200-E299)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Generic errors
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::AgentNotFound(_) => "E001",
            Self::InvalidInput(_) => "E100",
            Self::MissingField(_) => "E101",
            Self::ConfigError(_) => "E200",
            Self::Other(_) | Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::AgentNotFound(_) => Some("spark agents list".to_string()),
            Self::ConfigError(_) => Some("spark config list".to_string()),
            _ => None,
        }
    }
}
