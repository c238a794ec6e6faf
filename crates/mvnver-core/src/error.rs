//! Errors surfaced by version-set queries.

use thiserror::Error;

use crate::segment::Segment;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionsError {
    /// A segment deeper than the version encodes was requested.
    ///
    /// Recoverable: callers usually treat it as "no qualifying restriction".
    #[error("Segment {segment} is not valid for version '{version}' ({segment_count} segments)")]
    InvalidSegment {
        segment: Segment,
        segment_count: usize,
        version: String,
    },

    #[error("Invalid version range '{spec}': {message}")]
    InvalidVersionSpec { spec: String, message: String },

    #[error("Unknown version comparator '{0}': expected 'maven' or 'mercury'")]
    UnknownComparator(String),

    #[error("Unknown segment '{0}': expected major, minor, incremental or subincremental")]
    UnknownSegment(String),
}

impl VersionsError {
    pub(crate) fn invalid_spec(spec: &str, message: impl Into<String>) -> Self {
        Self::InvalidVersionSpec {
            spec: spec.to_string(),
            message: message.into(),
        }
    }

    pub const fn is_invalid_segment(&self) -> bool {
        matches!(self, Self::InvalidSegment { .. })
    }
}

pub type Result<T> = std::result::Result<T, VersionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionsError::InvalidSegment {
            segment: Segment::Subincremental,
            segment_count: 2,
            version: "1.1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Segment SUBINCREMENTAL is not valid for version '1.1' (2 segments)"
        );
        assert!(err.is_invalid_segment());

        let err = VersionsError::invalid_spec("[1.0", "unbalanced brackets");
        assert_eq!(
            err.to_string(),
            "Invalid version range '[1.0': unbalanced brackets"
        );
        assert!(!err.is_invalid_segment());
    }

    #[test]
    fn test_unknown_names() {
        let err = VersionsError::UnknownComparator("lexical".into());
        assert!(err.to_string().contains("lexical"));

        let err = VersionsError::UnknownSegment("nano".into());
        assert!(err.to_string().contains("nano"));
    }
}
