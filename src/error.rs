//! Error types for pickapp operations.
//!
//! This module defines [`PickError`], the error type used by the shell around
//! the core, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The core (normalizer, selection, install orchestration) never returns
//!   these errors; anomalies there are normalized, ignored or reported as
//!   outcome values
//! - Use `PickError` for configuration and persistence failures at the edges
//! - Use `anyhow::Error` (via `PickError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pickapp operations.
#[derive(Debug, Error)]
pub enum PickError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The persistent key-value store could not be read or written.
    #[error("State store unavailable at {path}: {message}")]
    StoreUnavailable { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pickapp operations.
pub type Result<T> = std::result::Result<T, PickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = PickError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PickError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn store_unavailable_displays_path_and_message() {
        let err = PickError::StoreUnavailable {
            path: PathBuf::from("/state/dismissals.yml"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dismissals.yml"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PickError = io_err.into();
        assert!(matches!(err, PickError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: PickError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
