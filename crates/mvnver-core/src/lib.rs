//! Maven version model and version-set queries.
//!
//! This crate answers update questions about a single artifact: given every
//! published version and the version a project currently declares, which
//! versions are newer, which fall inside a range, and which updates change
//! only a given segment (major, minor, incremental or sub-incremental).
//!
//! Ordering is pluggable through [`VersionComparator`]. Two strategies ship
//! with the crate: [`MavenComparator`] follows Maven's qualifier ranking and
//! [`MercuryComparator`] compares qualifiers lexically.
//!
//! # Examples
//!
//! ```
//! use mvnver_core::{ArtifactCoordinate, ComparatorKind, Segment, VersionCache, VersionSet};
//!
//! let artifact = ArtifactCoordinate::new("org.example", "lib").with_version("1.1").unwrap();
//! let set = VersionSet::new(
//!     artifact,
//!     ["1.0", "1.1", "1.1.1", "1.2", "2.0"],
//!     ComparatorKind::Maven.comparator(),
//!     &VersionCache::new(),
//! );
//!
//! let newest = set.newest_update(Some(Segment::Minor), false).unwrap();
//! assert_eq!(newest.as_str(), "1.2");
//! ```

pub mod artifact;
pub mod cache;
pub mod comparator;
pub mod error;
pub mod evaluator;
pub mod qualifier;
pub mod restriction;
pub mod segment;
pub mod version;
pub mod version_set;

pub use artifact::ArtifactCoordinate;
pub use cache::VersionCache;
pub use comparator::{ComparatorKind, MavenComparator, MercuryComparator, VersionComparator};
pub use error::{Result, VersionsError};
pub use evaluator::RangeEvaluator;
pub use qualifier::QualifierKind;
pub use restriction::{Bound, Edge, Restriction, VersionRange};
pub use segment::Segment;
pub use version::Version;
pub use version_set::{UpdateSummary, VersionSet};
