//! Errors surfaced by the command-line front end.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Versions(#[from] mvnver_core::VersionsError),

    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{origin}': {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    pub(crate) fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            origin: origin.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvnver_core::VersionsError;

    #[test]
    fn test_core_error_is_transparent() {
        let err: CliError = VersionsError::UnknownComparator("semver".into()).into();
        assert_eq!(
            err.to_string(),
            VersionsError::UnknownComparator("semver".into()).to_string()
        );
    }

    #[test]
    fn test_read_file_message() {
        let err = CliError::ReadFile {
            path: PathBuf::from("/missing/versions.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read '/missing/versions.json': not found"
        );
    }

    #[test]
    fn test_json_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::json("<stdin>", source);
        assert!(err.to_string().starts_with("Failed to parse '<stdin>':"));
    }
}
