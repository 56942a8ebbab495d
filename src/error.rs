// src/error.rs
use std::io;
use thiserror::Error;

/// Raised while turning raw options into a generation config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no character classes enabled")]
    NoClassesEnabled,

    #[error("password length {length} is below the minimum of {minimum}")]
    LengthTooShort { length: usize, minimum: usize },

    #[error("password count must be at least 1 (got {0})")]
    InvalidCount(usize),

    #[error("template pattern is empty")]
    EmptyTemplate,

    #[error("unrecognized template token '{token}' at position {position} (expected U, L, D, S or X)")]
    UnknownTemplateToken { token: char, position: usize },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Randomness source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Prompt error: {0}")]
    Prompt(inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation cancelled by user.")]
    Cancelled,
}

impl From<inquire::InquireError> for AppError {
    fn from(e: inquire::InquireError) -> Self {
        match e {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => AppError::Cancelled,
            other => AppError::Prompt(other),
        }
    }
}

impl AppError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Configuration(_) => 2,
            AppError::Cancelled => 130,
            _ => 1,
        }
    }
}
