//! Version restrictions and Maven range specifications.
//!
//! A [`Restriction`] is a pair of optional bounds with independent
//! inclusive flags. A [`VersionRange`] is what a Maven version spec such as
//! `[1.0,2.0)` or `(,1.0],[1.2,)` parses to: an optional recommended version
//! plus a union of restrictions.

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::VersionComparator;
use crate::error::{Result, VersionsError};
use crate::segment::Segment;
use crate::version::Version;

/// Where a bound sits on the version line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edge {
    /// Exactly at a version.
    At(Version),
    /// Just above every version sharing `version`'s segments that are more
    /// significant than `segment`, and below every version whose prefix is
    /// greater.
    ///
    /// For `1.0.0` at [`Segment::Incremental`] the edge sits above all of
    /// `1.0.*`. At [`Segment::Major`] it sits above everything.
    PastSegment { version: Version, segment: Segment },
}

impl Edge {
    /// Orders `candidate` relative to this edge.
    pub fn cmp_candidate(&self, comparator: &dyn VersionComparator, candidate: &Version) -> Ordering {
        match self {
            Self::At(version) => comparator.compare(candidate, version),
            Self::PastSegment { version, segment } => {
                match candidate.compare_prefix(version, *segment) {
                    Ordering::Equal => Ordering::Less,
                    ord => ord,
                }
            }
        }
    }

    pub fn version(&self) -> &Version {
        match self {
            Self::At(version) | Self::PastSegment { version, .. } => version,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(version) => write!(f, "{version}"),
            Self::PastSegment { version, segment } => {
                for i in 0..segment.index() {
                    write!(f, "{}.", version.numeric_at(i))?;
                }
                f.write_str("*")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    pub edge: Edge,
    pub inclusive: bool,
}

impl Bound {
    pub fn inclusive(version: Version) -> Self {
        Self {
            edge: Edge::At(version),
            inclusive: true,
        }
    }

    pub fn exclusive(version: Version) -> Self {
        Self {
            edge: Edge::At(version),
            inclusive: false,
        }
    }

    /// Exclusive bound just past `version`'s range at `segment`.
    pub fn past_segment(version: Version, segment: Segment) -> Self {
        Self {
            edge: Edge::PastSegment { version, segment },
            inclusive: false,
        }
    }
}

/// An interval of versions. Absent bounds are open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restriction {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Restriction {
    pub fn new(lower: Option<Bound>, upper: Option<Bound>) -> Self {
        Self { lower, upper }
    }

    /// Builds a restriction from exact versions and inclusive flags.
    pub fn between(
        lower: Option<Version>,
        lower_inclusive: bool,
        upper: Option<Version>,
        upper_inclusive: bool,
    ) -> Self {
        Self {
            lower: lower.map(|version| Bound {
                edge: Edge::At(version),
                inclusive: lower_inclusive,
            }),
            upper: upper.map(|version| Bound {
                edge: Edge::At(version),
                inclusive: upper_inclusive,
            }),
        }
    }

    /// The restriction every version satisfies.
    pub fn everything() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Checks both bounds of the restriction for `version`.
    pub fn contains(&self, comparator: &dyn VersionComparator, version: &Version) -> bool {
        let above_lower = self.lower.as_ref().is_none_or(|bound| {
            match bound.edge.cmp_candidate(comparator, version) {
                Ordering::Greater => true,
                Ordering::Equal => bound.inclusive,
                Ordering::Less => false,
            }
        });
        let below_upper = self.upper.as_ref().is_none_or(|bound| {
            match bound.edge.cmp_candidate(comparator, version) {
                Ordering::Less => true,
                Ordering::Equal => bound.inclusive,
                Ordering::Greater => false,
            }
        });
        above_lower && below_upper
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(lower), Some(upper)) = (&self.lower, &self.upper)
            && lower.inclusive
            && upper.inclusive
            && lower.edge == upper.edge
        {
            return write!(f, "[{}]", lower.edge);
        }

        match &self.lower {
            Some(bound) => write!(f, "{}{}", if bound.inclusive { '[' } else { '(' }, bound.edge)?,
            None => f.write_str("(")?,
        }
        f.write_str(",")?;
        match &self.upper {
            Some(bound) => write!(f, "{}{}", bound.edge, if bound.inclusive { ']' } else { ')' }),
            None => f.write_str(")"),
        }
    }
}

/// A parsed Maven version specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    recommended: Option<Version>,
    restrictions: Vec<Restriction>,
}

impl VersionRange {
    /// Parses a Maven version spec.
    ///
    /// Supports a soft requirement (`1.0`), an exact hard requirement
    /// (`[1.0]`), intervals with either bound open (`[1.0,2.0)`, `(,1.0]`,
    /// `[1.5,)`) and comma-joined unions (`(,1.0],[1.2,)`). Ordering checks
    /// use the Maven comparator.
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(VersionsError::invalid_spec(spec, "empty version spec"));
        }

        if !trimmed.starts_with(['[', '(']) {
            if trimmed.contains([']', ')', ',']) {
                return Err(VersionsError::invalid_spec(
                    spec,
                    "range delimiters outside of a range",
                ));
            }
            return Ok(Self {
                recommended: Some(Version::parse(trimmed)),
                restrictions: Vec::new(),
            });
        }

        let comparator = crate::comparator::MavenComparator;
        let mut restrictions: Vec<Restriction> = Vec::new();
        let mut rest = trimmed;

        while !rest.is_empty() {
            if !rest.starts_with(['[', '(']) {
                return Err(VersionsError::invalid_spec(
                    spec,
                    "only fully-qualified sets allowed in multiple set scenario",
                ));
            }
            let close = rest
                .find([']', ')'])
                .ok_or_else(|| VersionsError::invalid_spec(spec, "unbounded range"))?;
            let restriction = parse_restriction(spec, &rest[..=close])?;

            if let Some(previous) = restrictions.last()
                && !starts_after(&comparator, previous, &restriction)
            {
                return Err(VersionsError::invalid_spec(
                    spec,
                    "ranges overlap or are out of order",
                ));
            }
            restrictions.push(restriction);

            rest = rest[close + 1..].trim_start();
            if let Some(next) = rest.strip_prefix(',') {
                rest = next.trim_start();
                if rest.is_empty() {
                    return Err(VersionsError::invalid_spec(spec, "trailing comma"));
                }
            } else if !rest.is_empty() {
                return Err(VersionsError::invalid_spec(
                    spec,
                    "only fully-qualified sets allowed in multiple set scenario",
                ));
            }
        }

        Ok(Self {
            recommended: None,
            restrictions,
        })
    }

    /// A range that recommends `version` without restricting anything.
    pub fn recommended(version: Version) -> Self {
        Self {
            recommended: Some(version),
            restrictions: Vec::new(),
        }
    }

    pub fn recommended_version(&self) -> Option<&Version> {
        self.recommended.as_ref()
    }

    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    /// The recommended version, or the highest lower bound of the range.
    ///
    /// `[1.0,2.0),[3.0,4.0)` yields `3.0`.
    pub fn current_version(&self, comparator: &dyn VersionComparator) -> Option<Version> {
        if let Some(version) = &self.recommended {
            return Some(version.clone());
        }
        self.restrictions
            .iter()
            .filter_map(|r| r.lower.as_ref())
            .map(|bound| bound.edge.version())
            .max_by(|a, b| comparator.compare(a, b))
            .cloned()
    }

    /// Union membership; a soft requirement contains every version.
    pub fn contains(&self, comparator: &dyn VersionComparator, version: &Version) -> bool {
        self.restrictions.is_empty()
            || self
                .restrictions
                .iter()
                .any(|restriction| restriction.contains(comparator, version))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(version) = &self.recommended {
            return write!(f, "{version}");
        }
        for (i, restriction) in self.restrictions.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{restriction}")?;
        }
        Ok(())
    }
}

fn parse_restriction(spec: &str, text: &str) -> Result<Restriction> {
    let lower_inclusive = text.starts_with('[');
    let upper_inclusive = text.ends_with(']');
    let inner = text[1..text.len() - 1].trim();

    match inner.split_once(',') {
        None => {
            if !(lower_inclusive && upper_inclusive) {
                return Err(VersionsError::invalid_spec(
                    spec,
                    "single version must be surrounded by []",
                ));
            }
            if inner.is_empty() {
                return Err(VersionsError::invalid_spec(spec, "empty exact version"));
            }
            let version = Version::parse(inner);
            Ok(Restriction::between(
                Some(version.clone()),
                true,
                Some(version),
                true,
            ))
        }
        Some((lower, upper)) => {
            let (lower, upper) = (lower.trim(), upper.trim());
            if upper.contains(',') {
                return Err(VersionsError::invalid_spec(
                    spec,
                    "range cannot have more than two bounds",
                ));
            }
            let lower = (!lower.is_empty()).then(|| Version::parse(lower));
            let upper = (!upper.is_empty()).then(|| Version::parse(upper));

            if let (Some(lo), Some(hi)) = (&lower, &upper)
                && crate::comparator::MavenComparator.compare(hi, lo) == Ordering::Less
            {
                return Err(VersionsError::invalid_spec(
                    spec,
                    "range defies version ordering",
                ));
            }

            Ok(Restriction::between(
                lower,
                lower_inclusive,
                upper,
                upper_inclusive,
            ))
        }
    }
}

/// True when `next` begins strictly after `previous` ends.
fn starts_after(
    comparator: &dyn VersionComparator,
    previous: &Restriction,
    next: &Restriction,
) -> bool {
    let (Some(prev_upper), Some(next_lower)) = (&previous.upper, &next.lower) else {
        return false;
    };
    match comparator.compare(next_lower.edge.version(), prev_upper.edge.version()) {
        Ordering::Greater => true,
        Ordering::Equal => !(prev_upper.inclusive && next_lower.inclusive),
        Ordering::Less => false,
    }
}
