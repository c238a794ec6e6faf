//! The JSON document describing one artifact and its published versions.

use mvnver_core::{ArtifactCoordinate, VersionCache, VersionComparator, VersionSet};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CliError, Result};

/// Input document:
///
/// ```json
/// {
///   "group_id": "org.apache.commons",
///   "artifact_id": "commons-lang3",
///   "current": "3.12.0",
///   "versions": ["3.11", "3.12.0", "3.13.0"]
/// }
/// ```
///
/// `current` may be a plain version or a range such as `[3.0,4.0)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionDocument {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub versions: Vec<String>,
}

impl VersionDocument {
    pub fn from_json(content: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| CliError::json(origin, source))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json(&content, "<stdin>")
    }

    pub fn artifact(&self) -> Result<ArtifactCoordinate> {
        let artifact = ArtifactCoordinate::new(&self.group_id, &self.artifact_id);
        match &self.current {
            Some(spec) => Ok(artifact.with_version(spec)?),
            None => Ok(artifact),
        }
    }

    pub fn into_version_set(
        self,
        comparator: Arc<dyn VersionComparator>,
        cache: &VersionCache,
    ) -> Result<VersionSet> {
        let artifact = self.artifact()?;
        Ok(VersionSet::new(artifact, self.versions, comparator, cache))
    }
}
