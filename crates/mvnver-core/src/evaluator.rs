//! Builds scope restrictions around an artifact's current version and
//! evaluates restriction membership.

use crate::comparator::VersionComparator;
use crate::error::Result;
use crate::restriction::{Bound, Restriction};
use crate::segment::Segment;
use crate::version::Version;

/// Restriction builder seeded with a comparator and the current version.
#[derive(Debug, Clone, Copy)]
pub struct RangeEvaluator<'a> {
    comparator: &'a dyn VersionComparator,
    current: Option<&'a Version>,
}

impl<'a> RangeEvaluator<'a> {
    pub fn new(comparator: &'a dyn VersionComparator, current: Option<&'a Version>) -> Self {
        Self {
            comparator,
            current,
        }
    }

    /// Restriction admitting only versions that are not ignored.
    ///
    /// Ignoring `segment` drops every version that equals the current one on
    /// all segments more significant than `segment`, so from `1.0.0`:
    ///
    /// - `Subincremental` keeps `1.0.1` and up
    /// - `Incremental` keeps `1.1.0` and up
    /// - `Minor` keeps `2.0.0` and up
    /// - `Major` keeps nothing
    ///
    /// Without a segment only versions strictly newer than the current one
    /// are kept. Without a current version nothing is restricted.
    pub fn restriction_for_ignore_scope(&self, segment: Option<Segment>) -> Restriction {
        let Some(current) = self.current else {
            return Restriction::everything();
        };
        let lower = match segment {
            Some(segment) => Bound::past_segment(current.clone(), segment),
            None => Bound::exclusive(current.clone()),
        };
        Restriction::new(Some(lower), None)
    }

    /// Window of updates whose most significant change is exactly `segment`.
    ///
    /// From `1.1`, `Incremental` admits `1.1.1` through `1.1.x` but neither
    /// `1.1.0-2` (a sub-incremental change) nor `1.2` (a minor change). Without
    /// a segment every newer version qualifies.
    pub fn restriction_for_update_scope(&self, segment: Option<Segment>) -> Result<Restriction> {
        let Some(current) = self.current else {
            return Ok(Restriction::everything());
        };
        let Some(segment) = segment else {
            return Ok(Restriction::new(Some(Bound::exclusive(current.clone())), None));
        };
        self.comparator.validate_segment(current, segment)?;

        let lower = match segment.minor_neighbor() {
            Some(finer) => Bound::past_segment(current.clone(), finer),
            None => Bound::exclusive(current.clone()),
        };
        let upper = (segment != Segment::Major)
            .then(|| Bound::past_segment(current.clone(), segment));

        Ok(Restriction::new(Some(lower), upper))
    }

    /// Inclusive/exclusive check at both ends; absent bounds always pass.
    pub fn contains_version(&self, restriction: &Restriction, version: &Version) -> bool {
        restriction.contains(self.comparator, version)
    }
}
