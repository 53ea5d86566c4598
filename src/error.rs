//! Plugin pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by operations with side effects or failed lookups.
///
/// Catalog and config anomalies never show up here: they degrade to
/// "no assets" or "no effect" and are at most logged.
#[derive(Debug, Error)]
pub enum InkError {
    #[error("Plugin '{0}' not found.")]
    NotFound(String),

    #[error("directory {} is not empty. Use --force to overwrite files.", .0.display())]
    NotEmpty(PathBuf),

    #[error("IO error at `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),
}

impl InkError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io(path.into(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let err = InkError::NotFound("awesome-sauce".into());
        assert_eq!(err.to_string(), "Plugin 'awesome-sauce' not found.");

        let err = InkError::NotEmpty(PathBuf::from("_plugins/theme"));
        let display = err.to_string();
        assert!(display.contains("_plugins/theme"));
        assert!(display.contains("--force"));

        let err = InkError::io("out/a.css", Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(err.to_string().contains("out/a.css"));
    }
}
