//! Resolution error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by configuration resolution and emission.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to scan source tree")]
    Scan(#[from] walkdir::Error),

    #[error("failed to encode configuration as JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode configuration as TOML")]
    Toml(#[from] toml::ser::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_resolve_error_display() {
        let io_err = ResolveError::Io(
            PathBuf::from("bundler.json"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("bundler.json"));

        let validation = ResolveError::Validation("source tree missing".to_string());
        assert!(format!("{validation}").contains("source tree missing"));
    }
}
