//! Error types for jubee.
//!
//! Navigation never fails: unknown view keys and tool names fall back to a
//! default screen. Errors only arise from configuration, file IO, the terminal,
//! and radar workflow operations invoked out of order.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jubee operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum JubeeError {
    /// Configuration could not be loaded or failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup, drawing or teardown failed
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

/// Rejected precedent-radar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RadarError {
    #[error("Enter a proposition and choose at least one court")]
    IncompleteDraft,

    #[error("No radar with id '{0}'")]
    UnknownRadar(String),

    #[error("Cannot {operation} while in the {phase} phase")]
    WrongPhase {
        operation: &'static str,
        phase: &'static str,
    },
}

/// Convenient Result type for jubee operations
pub type Result<T> = std::result::Result<T, JubeeError>;

impl JubeeError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }
}
