//! The query surface over one artifact's known versions.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::artifact::ArtifactCoordinate;
use crate::cache::VersionCache;
use crate::comparator::VersionComparator;
use crate::error::Result;
use crate::evaluator::RangeEvaluator;
use crate::restriction::{Bound, Edge, Restriction, VersionRange};
use crate::segment::Segment;
use crate::version::Version;

/// All known versions of one artifact, sorted by an injected comparator.
///
/// Built once and never mutated; every query is a read. Snapshot versions
/// are hidden from every query unless `include_snapshots` is set.
pub struct VersionSet {
    artifact: ArtifactCoordinate,
    comparator: Arc<dyn VersionComparator>,
    current: Option<Version>,
    versions: Vec<Version>,
}

/// Newest available update per segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSummary {
    pub subincremental: Option<Version>,
    pub incremental: Option<Version>,
    pub minor: Option<Version>,
    pub major: Option<Version>,
}

impl UpdateSummary {
    pub fn get(&self, segment: Segment) -> Option<&Version> {
        match segment {
            Segment::Major => self.major.as_ref(),
            Segment::Minor => self.minor.as_ref(),
            Segment::Incremental => self.incremental.as_ref(),
            Segment::Subincremental => self.subincremental.as_ref(),
        }
    }

    pub fn has_updates(&self) -> bool {
        Segment::ALL.iter().any(|&segment| self.get(segment).is_some())
    }
}

impl VersionSet {
    /// Parses `versions` through `cache` and sorts them with `comparator`.
    ///
    /// Duplicate literals collapse to one entry. Literals the comparator
    /// considers equal (`1.0` and `1.0.0` under Maven ordering) are both kept
    /// and ordered by their text.
    pub fn new<I, S>(
        artifact: ArtifactCoordinate,
        versions: I,
        comparator: Arc<dyn VersionComparator>,
        cache: &VersionCache,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = versions
            .into_iter()
            .map(|literal| cache.get(literal.as_ref()))
            .collect();
        Self::from_versions(artifact, parsed, comparator)
    }

    pub fn from_versions(
        artifact: ArtifactCoordinate,
        mut versions: Vec<Version>,
        comparator: Arc<dyn VersionComparator>,
    ) -> Self {
        versions.sort_by(|a, b| {
            comparator
                .compare(a, b)
                .then_with(|| a.as_str().cmp(b.as_str()))
        });
        versions.dedup();

        let current = artifact
            .version
            .as_ref()
            .and_then(|range| range.current_version(comparator.as_ref()));

        tracing::debug!(
            artifact = %artifact,
            comparator = comparator.name(),
            count = versions.len(),
            current = ?current.as_ref().map(Version::as_str),
            "built version set"
        );

        Self {
            artifact,
            comparator,
            current,
            versions,
        }
    }

    pub fn artifact(&self) -> &ArtifactCoordinate {
        &self.artifact
    }

    pub fn group_id(&self) -> &str {
        &self.artifact.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact.artifact_id
    }

    /// The artifact's declared version, or the highest lower bound of its
    /// declared range.
    pub fn current_version(&self) -> Option<&Version> {
        self.current.as_ref()
    }

    pub fn comparator(&self) -> &dyn VersionComparator {
        self.comparator.as_ref()
    }

    /// Number of stored versions, snapshots included.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn contains(&self, literal: &str) -> bool {
        self.versions.iter().any(|v| v.as_str() == literal)
    }

    pub fn evaluator(&self) -> RangeEvaluator<'_> {
        RangeEvaluator::new(self.comparator.as_ref(), self.current.as_ref())
    }

    fn visible(&self, include_snapshots: bool) -> impl Iterator<Item = &Version> {
        self.versions
            .iter()
            .filter(move |v| include_snapshots || !v.is_snapshot())
    }

    /// Every stored version in ascending order.
    pub fn versions(&self, include_snapshots: bool) -> Vec<Version> {
        self.visible(include_snapshots).cloned().collect()
    }

    /// Versions inside `restriction`; `None` restricts nothing.
    pub fn versions_matching(
        &self,
        restriction: Option<&Restriction>,
        include_snapshots: bool,
    ) -> Vec<Version> {
        let Some(restriction) = restriction else {
            return self.versions(include_snapshots);
        };
        tracing::trace!(%restriction, include_snapshots, "filtering versions");
        self.visible(include_snapshots)
            .filter(|v| restriction.contains(self.comparator.as_ref(), v))
            .cloned()
            .collect()
    }

    /// Versions strictly between `lower` and `upper`; absent bounds are open.
    pub fn versions_between(
        &self,
        lower: Option<&Version>,
        upper: Option<&Version>,
        include_snapshots: bool,
    ) -> Vec<Version> {
        let restriction = Restriction::between(lower.cloned(), false, upper.cloned(), false);
        self.versions_matching(Some(&restriction), include_snapshots)
    }

    /// Newest version strictly between `lower` and `upper`.
    pub fn newest_version(
        &self,
        lower: Option<&Version>,
        upper: Option<&Version>,
        include_snapshots: bool,
    ) -> Option<Version> {
        self.versions_between(lower, upper, include_snapshots).pop()
    }

    /// Versions inside any restriction of `range`.
    pub fn versions_in_range(&self, range: &VersionRange, include_snapshots: bool) -> Vec<Version> {
        self.visible(include_snapshots)
            .filter(|v| range.contains(self.comparator.as_ref(), v))
            .cloned()
            .collect()
    }

    pub fn newest_in_range(&self, range: &VersionRange, include_snapshots: bool) -> Option<Version> {
        self.versions_in_range(range, include_snapshots).pop()
    }

    /// Versions newer than `threshold` (or equal, with `include_current`).
    ///
    /// With a `segment`, only versions that keep the threshold's segments
    /// more significant than `segment` qualify: from `1.2.3`, `Incremental`
    /// admits `1.2.4` but not `1.3.0`. `Major` and `None` admit any newer
    /// version.
    pub fn newer_versions(
        &self,
        threshold: &str,
        segment: Option<Segment>,
        include_snapshots: bool,
        include_current: bool,
    ) -> Result<Vec<Version>> {
        let threshold = Version::parse(threshold);
        self.newer_than(&threshold, segment, include_snapshots, include_current)
    }

    fn newer_than(
        &self,
        threshold: &Version,
        segment: Option<Segment>,
        include_snapshots: bool,
        include_current: bool,
    ) -> Result<Vec<Version>> {
        let upper = match segment {
            Some(segment) => {
                self.comparator.validate_segment(threshold, segment)?;
                Some(Bound::past_segment(threshold.clone(), segment))
            }
            None => None,
        };
        let lower = Bound {
            edge: Edge::At(threshold.clone()),
            inclusive: include_current,
        };
        let restriction = Restriction::new(Some(lower), upper);
        Ok(self.versions_matching(Some(&restriction), include_snapshots))
    }

    /// Newest of [`newer_versions`](Self::newer_versions) for the current
    /// version. An invalid segment yields `None`.
    pub fn newest_update(&self, segment: Option<Segment>, include_snapshots: bool) -> Option<Version> {
        let current = self.current.as_ref()?;
        match self.newer_than(current, segment, include_snapshots, false) {
            Ok(mut newer) => newer.pop(),
            Err(err) => {
                tracing::warn!(artifact = %self.artifact, error = %err, "no update restriction");
                None
            }
        }
    }

    pub fn is_empty(&self, include_snapshots: bool) -> bool {
        self.visible(include_snapshots).next().is_none()
    }

    /// See [`RangeEvaluator::restriction_for_ignore_scope`].
    pub fn restriction_for_ignore_scope(&self, segment: Option<Segment>) -> Restriction {
        self.evaluator().restriction_for_ignore_scope(segment)
    }

    /// Versions left once changes at `segment` and below are ignored.
    pub fn versions_for_ignore_scope(
        &self,
        segment: Option<Segment>,
        include_snapshots: bool,
    ) -> Vec<Version> {
        let restriction = self.restriction_for_ignore_scope(segment);
        self.versions_matching(Some(&restriction), include_snapshots)
    }

    /// See [`RangeEvaluator::restriction_for_update_scope`].
    pub fn restriction_for_update_scope(&self, segment: Option<Segment>) -> Result<Restriction> {
        self.evaluator().restriction_for_update_scope(segment)
    }

    /// Updates whose most significant change is exactly `segment`.
    pub fn all_updates(&self, segment: Option<Segment>, include_snapshots: bool) -> Vec<Version> {
        match self.restriction_for_update_scope(segment) {
            Ok(restriction) if self.current.is_some() => {
                self.versions_matching(Some(&restriction), include_snapshots)
            }
            Ok(_) => Vec::new(),
            Err(err) => {
                tracing::warn!(artifact = %self.artifact, error = %err, "no update restriction");
                Vec::new()
            }
        }
    }

    /// Newest update for each segment of the current version.
    pub fn update_summary(&self, include_snapshots: bool) -> UpdateSummary {
        let newest = |segment| self.all_updates(Some(segment), include_snapshots).pop();
        UpdateSummary {
            subincremental: newest(Segment::Subincremental),
            incremental: newest(Segment::Incremental),
            minor: newest(Segment::Minor),
            major: newest(Segment::Major),
        }
    }
}

impl fmt::Debug for VersionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionSet")
            .field("artifact", &self.artifact.name())
            .field("comparator", &self.comparator.name())
            .field("current", &self.current.as_ref().map(Version::as_str))
            .field("versions", &self.versions.len())
            .finish()
    }
}
