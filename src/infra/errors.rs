// src/infra/errors.rs - Error types for InterviewMate

use thiserror::Error;

/// Form validation failures. The display strings are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Error, Debug)]
pub enum InterviewMateError {
    // User errors (recoverable by correcting input)
    #[error("{0}")]
    Validation(#[from] FormError),

    #[error("No interview preferences found. Pick a domain and difficulty on the dashboard.")]
    NoPreferences,

    #[error("Unknown domain '{0}'")]
    UnknownDomain(String),

    #[error("Unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    #[error("Unknown route '{0}'")]
    UnknownRoute(String),

    // Flow errors
    #[error("Interview already completed")]
    InterviewFinished,

    #[error("Mock interview is not running")]
    NotRunning,

    // Infra
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InterviewMateError {
    /// True for errors the user can fix by re-entering input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            InterviewMateError::Validation(_)
                | InterviewMateError::UnknownDomain(_)
                | InterviewMateError::UnknownDifficulty(_)
                | InterviewMateError::UnknownRole(_)
                | InterviewMateError::UnknownRoute(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, InterviewMateError>;
