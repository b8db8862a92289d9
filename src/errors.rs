//! Error types for textlab
//!
//! Inputs that are merely degenerate (empty sentences, a word that never
//! occurs) produce neutral results. The variants below cover the inputs that
//! cannot be scored at all, plus file and serialization failures.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextLabError>;

/// Main error type for textlab
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextLabError {
    /// Plagiarism threshold outside of `[0, 1]`
    #[error("Invalid threshold: {value} is not within [0, 1]")]
    InvalidThreshold { value: f64 },

    /// An LCS length longer than the sentence it is scored against
    #[error("LCS length {lcs_length} exceeds sentence length {len}")]
    LengthExceeded { lcs_length: usize, len: usize },

    /// A caller-supplied LCS matrix does not belong to the given sentences
    #[error("LCS matrix mismatch: {message}")]
    MatrixMismatch { message: String },

    /// A text with no sentences where at least one is required
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading or writing a file failed
    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}

impl TextLabError {
    /// Create an invalid threshold error
    pub fn invalid_threshold(value: f64) -> Self {
        Self::InvalidThreshold { value }
    }

    /// Create a length exceeded error
    pub fn length_exceeded(lcs_length: usize, len: usize) -> Self {
        Self::LengthExceeded { lcs_length, len }
    }

    /// Create a matrix mismatch error
    pub fn matrix_mismatch(message: impl Into<String>) -> Self {
        Self::MatrixMismatch {
            message: message.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Check if this error comes from the environment rather than the input
    /// values (file missing, permissions, ...)
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<serde_json::Error> for TextLabError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
