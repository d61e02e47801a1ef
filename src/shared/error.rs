use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a partially failed batch
/// from a broken project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every query matched (whether or not the descriptor changed)
    Success = 0,
    /// At least one query did not match any declared dependency
    UnmatchedQueries = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (descriptor I/O, invalid project path, bad config)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnmatchedQueries => write!(f, "Unmatched Queries (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for extension removal.
///
/// Only storage and setup failures live here. A query that matches nothing
/// is not an error; it is reported in the removal outcome.
#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("No build descriptor found in: {path}\n\n💡 Hint: {suggestion}")]
    DescriptorNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read build descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is readable and well formed")]
    DescriptorReadError { path: PathBuf, details: String },

    #[error("Failed to write build descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    DescriptorWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
