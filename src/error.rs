//! Error types for the portal runtime.
//!
//! The renderers themselves never fail; everything here comes from the
//! configuration layer and the HTTP server around them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, PortalError>;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid theme field `{field}`: {value:?} ({reason})")]
    InvalidTheme {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Failed to bind portal server on {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("Invalid response header {name}")]
    Header { name: &'static str },

    #[error("Portal server thread panicked")]
    ServerPanicked,
}

impl PortalError {
    pub fn invalid_theme(field: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidTheme {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_theme_display_names_field() {
        let err = PortalError::invalid_theme("primary_start", "blue", "expected #RRGGBB");
        let msg = err.to_string();
        assert!(msg.contains("primary_start"));
        assert!(msg.contains("\"blue\""));
        assert!(msg.contains("expected #RRGGBB"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: PortalError = io.into();
        assert!(matches!(err, PortalError::Io(_)));
    }
}
