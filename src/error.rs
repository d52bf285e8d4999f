//! Error types for app-rename.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from rename operations.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Manifest file not found under the project root.
    ///
    /// Nothing has been touched when this is raised.
    #[error("You can't perform a rename. Manifest not found: {}", .0.display())]
    MissingManifest(PathBuf),

    /// The manifest has no usable `bin[0]` entry.
    #[error("Cannot determine the current binary from {}", .0.display())]
    UnknownBinary(PathBuf),

    /// Argument, prompt and directory fallback were all empty.
    #[error("Application name cannot be empty")]
    EmptyName,

    /// Bin declaration not found in the expected shape (`--strict` only).
    #[error("Manifest does not contain the bin declaration `{expected}`")]
    PatternMismatch { expected: String },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RenameError {
    /// Process exit status for this error.
    ///
    /// A missing manifest exits with 0: nothing was mutated, the failure is
    /// reported on stderr only.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenameError::MissingManifest(_) => 0,
            _ => 1,
        }
    }
}

/// Result type alias for app-rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_manifest_exits_cleanly() {
        let err = RenameError::MissingManifest(PathBuf::from("/tmp/app/composer.json"));
        assert_eq!(err.exit_code(), 0);
        assert!(err.to_string().contains("You can't perform a rename"));
    }

    #[test]
    fn test_filesystem_failure_exits_with_fault() {
        let err = RenameError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(RenameError::EmptyName.exit_code(), 1);
    }

    #[test]
    fn test_context_errors_become_other() {
        use anyhow::Context;

        let failed: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "cwd removed",
        ));
        let err: RenameError = failed
            .context("Failed to determine the current directory")
            .unwrap_err()
            .into();

        assert!(matches!(err, RenameError::Other(_)));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Failed to determine the current directory");
    }
}
