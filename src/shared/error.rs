use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Build scripts invoking the generator can tell argument mistakes
/// apart from generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Both files were generated
    Success = 0,
    /// Generation failed (manifest error, file I/O error, lifecycle error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for FSIO settings generation.
#[derive(Debug, Error)]
pub enum FsioError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Cannot {operation} {target}: output is in state '{state}'\n\n💡 Hint: start_file must be called exactly once before end_file")]
    OutOfSequence {
        target: String,
        operation: String,
        state: String,
    },

    #[error("Settings manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read settings manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ManifestReadError { path: PathBuf, details: String },

    #[error("Failed to parse settings manifest: {path}\nDetails: {details}\n\n💡 Hint: The manifest must contain a 'settings' list of {{ name, fsio_visible }} entries")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Invalid output path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a file inside an existing directory")]
    InvalidOutputPath { path: PathBuf, reason: String },

    /// Invalid configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
