//! Named positions in a version's numeric tuple.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VersionsError;

/// A position in the `major.minor.incremental-subincremental` tuple.
///
/// Lower indices are more significant: `Major` changes outrank `Minor`
/// changes, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Major,
    Minor,
    Incremental,
    Subincremental,
}

impl Segment {
    /// All segments, most significant first.
    pub const ALL: [Self; 4] = [
        Self::Major,
        Self::Minor,
        Self::Incremental,
        Self::Subincremental,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
            Self::Incremental => 2,
            Self::Subincremental => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Major),
            1 => Some(Self::Minor),
            2 => Some(Self::Incremental),
            3 => Some(Self::Subincremental),
            _ => None,
        }
    }

    /// Returns true if `self` is strictly more significant than `other`.
    pub const fn is_major_to(self, other: Self) -> bool {
        self.index() < other.index()
    }

    /// The next less significant segment, if any.
    pub const fn minor_neighbor(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Incremental => "incremental",
            Self::Subincremental => "subincremental",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

impl FromStr for Segment {
    type Err = VersionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "incremental" | "patch" => Ok(Self::Incremental),
            "subincremental" | "sub-incremental" | "build" => Ok(Self::Subincremental),
            other => Err(VersionsError::UnknownSegment(other.to_string())),
        }
    }
}
