//! Pluggable version ordering strategies.
//!
//! A [`VersionComparator`] is injected into each
//! [`VersionSet`](crate::VersionSet); there is no global default. Two
//! strategies ship with the crate and differ in how qualifiers and implicit
//! trailing zeros break ties:
//!
//! | versions              | [`MavenComparator`] | [`MercuryComparator`] |
//! |-----------------------|---------------------|-----------------------|
//! | `1.0` vs `1.0.0`      | equal               | `1.0.0` newer         |
//! | `1.0-jre` vs `1.0`    | `1.0-jre` newer     | `1.0` newer           |
//! | `1.0-sp1` vs `1.0`    | `1.0-sp1` newer     | `1.0` newer           |

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Result, VersionsError};
use crate::qualifier::{QualifierItem, maven_rank};
use crate::segment::Segment;
use crate::version::Version;

/// Total ordering over [`Version`]s with segment awareness.
pub trait VersionComparator: Send + Sync + fmt::Debug {
    /// Short strategy name, e.g. `"maven"`.
    fn name(&self) -> &'static str;

    /// Structural comparison. Must be deterministic and transitive.
    fn compare(&self, a: &Version, b: &Version) -> Ordering;

    /// Number of segments this strategy considers `version` to encode.
    fn segment_count(&self, version: &Version) -> usize;

    /// Fails with [`VersionsError::InvalidSegment`] when `segment` lies beyond
    /// what `version` encodes.
    ///
    /// A segment one past the last encoded one is still valid: it addresses
    /// the position an update would append.
    fn validate_segment(&self, version: &Version, segment: Segment) -> Result<()> {
        let segment_count = self.segment_count(version);
        if segment.index() > segment_count {
            return Err(VersionsError::InvalidSegment {
                segment,
                segment_count,
                version: version.to_string(),
            });
        }
        Ok(())
    }

    /// Compares `a` and `b` through `segment` only.
    fn compare_to_segment(&self, a: &Version, b: &Version, segment: Segment) -> Result<Ordering> {
        self.validate_segment(a, segment)?;
        self.validate_segment(b, segment)?;
        Ok(a.compare_through(b, segment))
    }

    /// The most significant segment at which `a` and `b` differ.
    ///
    /// Differences past the sub-incremental position, and qualifier-only
    /// differences, report [`Segment::Subincremental`]. Returns `None` when
    /// the strategy considers the versions equal.
    fn changed_segment(&self, a: &Version, b: &Version) -> Option<Segment> {
        if let Some(index) = a.first_numeric_difference(b) {
            return Segment::from_index(index.min(Segment::Subincremental.index()));
        }
        match self.compare(a, b) {
            Ordering::Equal => None,
            _ => Some(Segment::Subincremental),
        }
    }
}

/// Maven's ordering: numeric segments, then well-known qualifiers
/// (`alpha < beta < milestone < rc < snapshot < release < sp`), then any other
/// qualifier text.
///
/// Every version with a numeric part encodes at least
/// `major.minor.incremental`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenComparator;

impl VersionComparator for MavenComparator {
    fn name(&self) -> &'static str {
        "maven"
    }

    fn compare(&self, a: &Version, b: &Version) -> Ordering {
        a.numeric_cmp(b)
            .then_with(|| maven_qualifier_cmp(a.qualifier_items(), b.qualifier_items()))
    }

    fn segment_count(&self, version: &Version) -> usize {
        if version.has_numeric_part() {
            version.segments().len().max(3)
        } else {
            0
        }
    }
}

fn maven_qualifier_cmp(a: &[QualifierItem], b: &[QualifierItem]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| maven_rank(a.get(i)).cmp(&maven_rank(b.get(i))))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Mercury's ordering: numeric segments, then any qualifier ranks below the
/// plain release, then the version spelling out more segments is newer.
///
/// Only explicitly written segments count towards the segment count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MercuryComparator;

impl VersionComparator for MercuryComparator {
    fn name(&self) -> &'static str {
        "mercury"
    }

    fn compare(&self, a: &Version, b: &Version) -> Ordering {
        a.numeric_cmp(b)
            .then_with(|| mercury_qualifier_cmp(a.qualifier_items(), b.qualifier_items()))
            .then_with(|| a.segments().len().cmp(&b.segments().len()))
    }

    fn segment_count(&self, version: &Version) -> usize {
        version.segments().len()
    }
}

fn mercury_qualifier_cmp(a: &[QualifierItem], b: &[QualifierItem]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .iter()
            .zip(b)
            .map(|(x, y)| x.lexical_cmp(y))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

/// Selector for the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparatorKind {
    #[default]
    Maven,
    Mercury,
}

impl ComparatorKind {
    pub fn comparator(self) -> Arc<dyn VersionComparator> {
        match self {
            Self::Maven => Arc::new(MavenComparator),
            Self::Mercury => Arc::new(MercuryComparator),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maven => "maven",
            Self::Mercury => "mercury",
        }
    }
}

impl fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparatorKind {
    type Err = VersionsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maven" => Ok(Self::Maven),
            "mercury" => Ok(Self::Mercury),
            other => Err(VersionsError::UnknownComparator(other.to_string())),
        }
    }
}
