use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpVersionError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpVersionError>;

impl BumpVersionError {
    /// Create an I/O error bound to the file it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpVersionError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpVersionError::Config(msg.into())
    }

    /// True when the error came from reading or writing a file
    pub fn is_io(&self) -> bool {
        matches!(self, BumpVersionError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpVersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_io_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = BumpVersionError::io("android/app/build.gradle", io_err);
        let msg = err.to_string();
        assert!(msg.starts_with("I/O error on android/app/build.gradle"));
        assert!(msg.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_error_from_regex() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: BumpVersionError = regex_err.into();
        assert!(err.to_string().starts_with("Invalid field pattern"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpVersionError::config("x"), "Configuration error"),
            (
                BumpVersionError::Pattern(regex::Regex::new("[").unwrap_err()),
                "Invalid field pattern",
            ),
            (
                BumpVersionError::io(
                    "x",
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                ),
                "I/O error",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
