//! Resolved artifacts handed in by the external dependency-graph resolver

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A project artifact with its resolved local file, if any
///
/// The file may be absent: an artifact whose classes are fully shaded inside
/// another artifact never needs its own file. JSON input uses the Maven
/// field names (`groupId`, `artifactId`, `version`, `file`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl ResolvedArtifact {
    /// Creates an artifact without a local file
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            file: None,
        }
    }

    /// Attaches a local file path
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Returns the local file path, if any
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// The `groupId:artifactId:version` triple, for diagnostics
    pub fn coordinate_string(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
