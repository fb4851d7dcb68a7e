use std::io;

use thiserror::Error;

/// Library-wide error type for prompteng operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Input rejected locally before any network call.
    #[error("{0}")]
    Validation(String),

    /// The request never reached the backend.
    #[error(
        "Could not reach the prompt backend at {base_url}. Is the backend running? ({details})"
    )]
    Connectivity { base_url: String, details: String },

    /// The backend answered with a non-success status or an unreadable body.
    #[error("API error{}: {message}", .status.map(|s| format!(" {}", s)).unwrap_or_default())]
    Api { status: Option<u16>, message: String },

    /// The backend answered successfully but supplied nothing to show.
    #[error("The backend returned no {what}")]
    EmptyResult { what: String },

    /// Persisted state could not be decoded.
    #[error("Stored {key} state is corrupt: {details}")]
    PersistenceParse { key: String, details: String },

    /// Option value outside its enumeration.
    #[error("Invalid {kind} '{value}': must be one of {allowed}")]
    InvalidOption { kind: &'static str, value: String, allowed: String },

    /// No displayed prompt carries the given id.
    #[error("No prompt with id '{0}' in the current results")]
    PromptNotFound(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// User-facing classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Validation,
    Connectivity,
    Api,
    EmptyResult,
    Other,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Classify the error for a single user-visible notification.
    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            AppError::Validation(_) | AppError::InvalidOption { .. } => NoticeKind::Validation,
            AppError::Connectivity { .. } => NoticeKind::Connectivity,
            AppError::Api { .. } => NoticeKind::Api,
            AppError::EmptyResult { .. } => NoticeKind::EmptyResult,
            AppError::Io(_)
            | AppError::Configuration(_)
            | AppError::PersistenceParse { .. }
            | AppError::PromptNotFound(_)
            | AppError::ClipboardError(_)
            | AppError::TomlParseError(_) => NoticeKind::Other,
        }
    }
}
