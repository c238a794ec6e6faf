//! Query defaults loaded from a JSON settings file.

use mvnver_core::{ComparatorKind, Segment};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CliError, Result};

/// Defaults applied to every command; command-line flags take precedence.
///
/// Every field is optional in the file:
///
/// ```json
/// { "comparator": "mercury", "include_snapshots": true, "default_segment": "minor" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub comparator: ComparatorKind,
    pub include_snapshots: bool,
    /// Segment used by `newer`, `update` and `ignore` when none is given.
    pub default_segment: Option<Segment>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&content)
            .map_err(|source| CliError::json(path.display().to_string(), source))?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Settings from `path`, or defaults when no file is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn with_overrides(
        mut self,
        comparator: Option<ComparatorKind>,
        include_snapshots: bool,
    ) -> Self {
        if let Some(comparator) = comparator {
            self.comparator = comparator;
        }
        self.include_snapshots |= include_snapshots;
        self
    }

    pub fn segment_or_default(&self, segment: Option<Segment>) -> Option<Segment> {
        segment.or(self.default_segment)
    }
}
