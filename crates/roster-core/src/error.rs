//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

use crate::record::RecordId;
use crate::validation::{FormField, ValidationError};

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a record store when persisting a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("record {0} no longer exists")]
    NotFound(RecordId),

    #[error("store rejected the record: {0}")]
    Rejected(String),
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Coordinator Usage Errors (caller bugs)
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid disclosure state for {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: String,
    },

    #[error("Unknown record: {id}")]
    UnknownRecord { id: RecordId },

    // ─────────────────────────────────────────────────────────────
    // Form / Persistence Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{}", first_message(.0))]
    Validation(Vec<ValidationError>),

    #[error("Failed to save role: {0}")]
    Save(#[from] SaveError),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to load records from {path}: {message}")]
    RecordsLoad { path: PathBuf, message: String },
}

fn first_message(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "Validation failed".to_string())
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_state(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            operation,
            reason: reason.into(),
        }
    }

    pub fn unknown_record(id: impl Into<RecordId>) -> Self {
        Self::UnknownRecord { id: id.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn records_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::RecordsLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The field the form should focus, if this is a validation failure
    pub fn focus_field(&self) -> Option<FormField> {
        match self {
            Error::Validation(errors) => errors.first().map(ValidationError::field),
            _ => None,
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::Save(_) | Error::Config { .. } | Error::Terminal { .. }
        )
    }

    /// Check if this error signals a bug in the calling code or should
    /// trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidState { .. }
                | Error::UnknownRecord { .. }
                | Error::TerminalInit(_)
                | Error::RecordsLoad { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
