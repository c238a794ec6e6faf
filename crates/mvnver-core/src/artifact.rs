//! Artifact identity supplied alongside a version list.

use std::fmt;

use crate::error::Result;
use crate::restriction::VersionRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    /// The version the artifact currently declares, if any.
    pub version: Option<VersionRange>,
}

impl ArtifactCoordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
        }
    }

    /// Attaches the declared version spec: a plain version (`1.1`) or a
    /// range (`[1.0,3.0]`).
    pub fn with_version(mut self, spec: &str) -> Result<Self> {
        self.version = Some(VersionRange::parse(spec)?);
        Ok(self)
    }

    /// Canonical `groupId:artifactId` identifier.
    pub fn name(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}
