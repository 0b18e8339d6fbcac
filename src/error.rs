//! Error types for envinfo operations.
//!
//! This module defines [`EnvinfoError`], the error type used by the command
//! runner, the dependency auditor and the reporter, and a [`Result`] type
//! alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probes never surface these errors: they collapse failures into sentinel
//!   strings such as `Not Found`
//! - Use `EnvinfoError` for failures a caller must decide about (a missing
//!   manifest, a broken clipboard command)
//! - Use `anyhow::Error` (via `EnvinfoError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envinfo operations.
#[derive(Debug, Error)]
pub enum EnvinfoError {
    /// The program could not be spawned (usually not on PATH).
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    /// The program ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The project manifest could not be read.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// The project manifest is not valid JSON.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// No clipboard command accepted the report.
    #[error("Clipboard unavailable: {message}")]
    Clipboard { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envinfo operations.
pub type Result<T> = std::result::Result<T, EnvinfoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_not_found_displays_command() {
        let err = EnvinfoError::CommandNotFound {
            command: "watchman --version".into(),
        };
        assert!(err.to_string().contains("watchman --version"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = EnvinfoError::CommandFailed {
            command: "npm -v".into(),
            code: Some(127),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm -v"));
        assert!(msg.contains("127"));
    }

    #[test]
    fn manifest_not_found_displays_path() {
        let err = EnvinfoError::ManifestNotFound {
            path: PathBuf::from("/work/package.json"),
        };
        assert!(err.to_string().contains("/work/package.json"));
    }

    #[test]
    fn manifest_parse_displays_path_and_message() {
        let err = EnvinfoError::ManifestParse {
            path: PathBuf::from("package.json"),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("package.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EnvinfoError = io_err.into();
        assert!(matches!(err, EnvinfoError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: EnvinfoError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
