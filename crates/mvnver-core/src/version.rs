//! Maven version model: numeric segments, qualifier and snapshot detection.
//!
//! Parsing is total. Anything that does not fit the `major.minor.incremental`
//! shape degrades into a qualifier, so every literal has a `Version`.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::qualifier::{self, QualifierItem};
use crate::segment::Segment;

/// Number of segments a build number is padded to before it is appended.
const BUILD_NUMBER_POSITION: usize = 3;

/// An immutable, cheaply clonable parsed version.
///
/// Equality and hashing use the literal as written. Ordering is not defined
/// here; it comes from a [`VersionComparator`](crate::VersionComparator).
#[derive(Clone)]
pub struct Version(Arc<Parsed>);

struct Parsed {
    literal: String,
    segments: Vec<u64>,
    qualifier: Option<String>,
    items: Vec<QualifierItem>,
}

impl Version {
    /// Parses a version literal.
    ///
    /// - `1.2.3` → segments `[1, 2, 3]`
    /// - `1.1.0-2` → build number appended: `[1, 1, 0, 2]`
    /// - `2.0.0-SNAPSHOT` → `[2, 0, 0]` with qualifier `SNAPSHOT`
    /// - `RELEASE` → no segments, qualifier `RELEASE`
    pub fn parse(literal: &str) -> Self {
        let (segments, qualifier) = split_literal(literal.trim());
        let items = qualifier
            .as_deref()
            .map(qualifier::tokenize)
            .unwrap_or_default();
        Self(Arc::new(Parsed {
            literal: literal.to_string(),
            segments,
            qualifier,
            items,
        }))
    }

    pub fn as_str(&self) -> &str {
        &self.0.literal
    }

    /// Numeric segments, most significant first.
    pub fn segments(&self) -> &[u64] {
        &self.0.segments
    }

    /// Value of a segment; segments the literal does not spell out are zero.
    pub fn segment(&self, segment: Segment) -> u64 {
        self.numeric_at(segment.index())
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.0.qualifier.as_deref()
    }

    pub fn has_numeric_part(&self) -> bool {
        !self.0.segments.is_empty()
    }

    /// `-SNAPSHOT` suffixed or timestamped (`-20240101.123456-1`) snapshot.
    pub fn is_snapshot(&self) -> bool {
        self.qualifier().is_some_and(|q| {
            q.to_uppercase().ends_with("SNAPSHOT") || qualifier::is_timestamped_snapshot(q)
        })
    }

    /// Snapshot, alpha, beta, milestone or release candidate.
    pub fn is_prerelease(&self) -> bool {
        self.is_snapshot() || qualifier::leading_kind(&self.0.items).is_prerelease()
    }

    /// Compares numeric segments `0..=segment`, treating missing ones as zero.
    pub fn compare_through(&self, other: &Self, segment: Segment) -> Ordering {
        self.compare_first(other, segment.index() + 1)
    }

    /// Compares the segments strictly more significant than `segment`.
    ///
    /// Two versions with an equal prefix differ at most at `segment` or below.
    pub fn compare_prefix(&self, other: &Self, segment: Segment) -> Ordering {
        self.compare_first(other, segment.index())
    }

    /// True when both handles share the same parsed value.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub(crate) fn numeric_at(&self, index: usize) -> u64 {
        self.0.segments.get(index).copied().unwrap_or(0)
    }

    /// Compares every numeric segment, zero-padding the shorter version.
    pub(crate) fn numeric_cmp(&self, other: &Self) -> Ordering {
        let len = self.0.segments.len().max(other.0.segments.len());
        self.compare_first(other, len)
    }

    /// Index of the first numeric segment at which the versions differ.
    pub(crate) fn first_numeric_difference(&self, other: &Self) -> Option<usize> {
        let len = self.0.segments.len().max(other.0.segments.len());
        (0..len).find(|&i| self.numeric_at(i) != other.numeric_at(i))
    }

    pub(crate) fn qualifier_items(&self) -> &[QualifierItem] {
        &self.0.items
    }

    fn compare_first(&self, other: &Self, count: usize) -> Ordering {
        (0..count)
            .map(|i| self.numeric_at(i).cmp(&other.numeric_at(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

fn split_literal(literal: &str) -> (Vec<u64>, Option<String>) {
    let mut segments = Vec::new();
    let mut rest = literal;

    loop {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            break;
        }
        let after = &rest[digits..];
        if !(after.is_empty() || after.starts_with(['.', '-'])) {
            break;
        }
        let Ok(value) = rest[..digits].parse::<u64>() else {
            break;
        };
        segments.push(value);
        rest = after;
        match rest.strip_prefix('.') {
            Some(next) if next.starts_with(|c: char| c.is_ascii_digit()) => rest = next,
            _ => break,
        }
    }

    if !segments.is_empty()
        && let Some(build) = rest.strip_prefix('-')
        && !build.is_empty()
        && build.bytes().all(|b| b.is_ascii_digit())
        && let Ok(build) = build.parse::<u64>()
    {
        if segments.len() < BUILD_NUMBER_POSITION {
            segments.resize(BUILD_NUMBER_POSITION, 0);
        }
        segments.push(build);
        return (segments, None);
    }

    let qualifier = if segments.is_empty() {
        rest
    } else {
        rest.strip_prefix(['-', '.']).unwrap_or(rest)
    };
    let qualifier = (!qualifier.is_empty()).then(|| qualifier.to_string());

    (segments, qualifier)
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.0.literal == other.0.literal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.literal.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.literal)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Version")
            .field("literal", &self.0.literal)
            .field("segments", &self.0.segments)
            .field("qualifier", &self.0.qualifier)
            .finish()
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Version {
    fn from(literal: &str) -> Self {
        Self::parse(literal)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", &[1, 2, 3], None)]
    #[case("1.0.0.1", &[1, 0, 0, 1], None)]
    #[case("1.1.0-2", &[1, 1, 0, 2], None)]
    #[case("1-2", &[1, 0, 0, 2], None)]
    #[case("1.0.0.1-2", &[1, 0, 0, 1, 2], None)]
    #[case("2.0.0-SNAPSHOT", &[2, 0, 0], Some("SNAPSHOT"))]
    #[case("1.0-alpha-1", &[1, 0], Some("alpha-1"))]
    #[case("2.0.RELEASE", &[2, 0], Some("RELEASE"))]
    #[case("1.0a", &[1], Some("0a"))]
    #[case("RELEASE", &[], Some("RELEASE"))]
    #[case("", &[], None)]
    fn test_parse(#[case] literal: &str, #[case] segments: &[u64], #[case] qualifier: Option<&str>) {
        let version = Version::parse(literal);
        assert_eq!(version.segments(), segments);
        assert_eq!(version.qualifier(), qualifier);
        assert_eq!(version.as_str(), literal);
    }

    #[test]
    fn test_overflowing_segment_becomes_qualifier() {
        let version = Version::parse("1.99999999999999999999999");
        assert_eq!(version.segments(), &[1]);
        assert_eq!(version.qualifier(), Some("99999999999999999999999"));
    }

    #[test]
    fn test_segment_accessor_pads_with_zero() {
        let version = Version::parse("3.1");
        assert_eq!(version.segment(Segment::Major), 3);
        assert_eq!(version.segment(Segment::Minor), 1);
        assert_eq!(version.segment(Segment::Incremental), 0);
        assert_eq!(version.segment(Segment::Subincremental), 0);
    }

    #[test]
    fn test_snapshot_detection() {
        assert!(Version::parse("1.0.0-SNAPSHOT").is_snapshot());
        assert!(Version::parse("1.0.0-snapshot").is_snapshot());
        assert!(Version::parse("1.0-20240101.123456-3").is_snapshot());
        assert!(!Version::parse("1.0.0").is_snapshot());
        assert!(!Version::parse("1.0.0-1").is_snapshot());
        assert!(!Version::parse("1.0.0-rc1").is_snapshot());
    }

    #[test]
    fn test_prerelease_detection() {
        assert!(Version::parse("1.0.0-SNAPSHOT").is_prerelease());
        assert!(Version::parse("1.0.0-alpha").is_prerelease());
        assert!(Version::parse("1.0.0-ALPHA").is_prerelease());
        assert!(Version::parse("1.0.0-beta").is_prerelease());
        assert!(Version::parse("1.0.0-rc1").is_prerelease());
        assert!(Version::parse("2.0.0-M1").is_prerelease());
        assert!(Version::parse("2.0.0-M10").is_prerelease());
    }

    #[test]
    fn test_stable_versions() {
        assert!(!Version::parse("1.0.0").is_prerelease());
        assert!(!Version::parse("3.14.0").is_prerelease());
        assert!(!Version::parse("1.2.3.Final").is_prerelease());
        assert!(!Version::parse("2.0.RELEASE").is_prerelease());
        assert!(!Version::parse("31.0-jre").is_prerelease());
    }

    #[test]
    fn test_compare_through_segment() {
        let a = Version::parse("1.2.3");
        let b = Version::parse("1.2.4");
        assert_eq!(a.compare_through(&b, Segment::Minor), Ordering::Equal);
        assert_eq!(a.compare_through(&b, Segment::Incremental), Ordering::Less);
        assert_eq!(
            Version::parse("1.2").compare_through(&Version::parse("1.2.0.0"), Segment::Subincremental),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_prefix() {
        let a = Version::parse("1.0.0");
        assert_eq!(
            a.compare_prefix(&Version::parse("1.0.0-1"), Segment::Subincremental),
            Ordering::Equal
        );
        assert_eq!(
            a.compare_prefix(&Version::parse("1.0.1"), Segment::Subincremental),
            Ordering::Less
        );
        assert_eq!(
            a.compare_prefix(&Version::parse("9.9.9"), Segment::Major),
            Ordering::Equal
        );
    }

    #[test]
    fn test_first_numeric_difference() {
        let a = Version::parse("1.0.0");
        assert_eq!(a.first_numeric_difference(&Version::parse("1.1")), Some(1));
        assert_eq!(a.first_numeric_difference(&Version::parse("1.0.0.0")), None);
        assert_eq!(a.first_numeric_difference(&Version::parse("1.0.0-3")), Some(3));
    }

    #[test]
    fn test_equality_uses_literal() {
        assert_eq!(Version::parse("1.0"), Version::parse("1.0"));
        assert_ne!(Version::parse("1.0"), Version::parse("1.0.0"));

        let mut set = std::collections::HashSet::new();
        set.insert(Version::parse("1.0"));
        set.insert(Version::parse("1.0"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_and_serialize() {
        let version = Version::parse("2.0.0-SNAPSHOT");
        assert_eq!(version.to_string(), "2.0.0-SNAPSHOT");
        assert_eq!(
            serde_json::to_string(&version).unwrap(),
            "\"2.0.0-SNAPSHOT\""
        );
    }
}
