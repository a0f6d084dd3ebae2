//! Dependency-conflict resolution
//!
//! Two sequential passes over the input artifact list. Pass one reads every
//! artifact's shaded-dependency manifest and unions the declarations into a
//! [`ShadowIndex`]. Pass two walks the same list in order and decides, per
//! artifact, whether to keep its file, skip it as already shaded, and which
//! placeholder archives to emit for version conflicts.

use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use crate::archive::{read_shaded_manifest, PlaceholderStore};
use crate::domain::{ResolvedArtifact, ShadowIndex};

#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("Artifact {0} has no resolvable file")]
    MissingArtifactFile(String),
}

/// Per-artifact outcome, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The artifact's own file goes into the layer
    Kept { coordinate: String, path: PathBuf },
    /// The artifact's classes are already shaded elsewhere; no file emitted
    SkippedShaded { coordinate: String },
    /// A conflicting shaded version claimed this library; an empty
    /// placeholder fills the slot
    Placeholder { coordinate: String, path: PathBuf },
}

/// Result of a resolve call: the ordered path list plus the decisions that
/// produced it
#[derive(Debug)]
pub struct Resolution {
    pub paths: Vec<PathBuf>,
    pub decisions: Vec<Decision>,
}

/// Resolves an artifact list into the ordered file list for layer assembly
pub struct DependencyResolver {
    placeholders: PlaceholderStore,
}

impl DependencyResolver {
    /// Creates a resolver writing placeholders through the given store
    pub fn new(placeholders: PlaceholderStore) -> Self {
        Self { placeholders }
    }

    /// Creates a resolver with placeholders under the system temp directory
    pub fn with_temp_placeholders() -> Self {
        Self::new(PlaceholderStore::in_temp_dir())
    }

    /// Resolves the artifact list, returning the ordered output paths
    ///
    /// Relative order of kept and placeholder entries follows the input
    /// iteration order. Manifest-read failures never surface here; the only
    /// error sources are placeholder creation and an artifact that must be
    /// kept but has no file.
    pub fn resolve(&self, artifacts: &[ResolvedArtifact]) -> Result<Vec<PathBuf>> {
        Ok(self.resolve_detailed(artifacts)?.paths)
    }

    /// Resolves the artifact list, also reporting per-artifact decisions
    pub fn resolve_detailed(&self, artifacts: &[ResolvedArtifact]) -> Result<Resolution> {
        let index = build_shadow_index(artifacts);

        let mut paths = Vec::new();
        let mut decisions = Vec::new();

        for artifact in artifacts {
            let shaded_exactly =
                index.contains_exact(&artifact.group_id, &artifact.artifact_id, &artifact.version);

            if shaded_exactly {
                decisions.push(Decision::SkippedShaded {
                    coordinate: artifact.coordinate_string(),
                });
            } else {
                let file = artifact
                    .file()
                    .ok_or_else(|| ResolveError::MissingArtifactFile(artifact.coordinate_string()))?;
                paths.push(file.to_path_buf());
                decisions.push(Decision::Kept {
                    coordinate: artifact.coordinate_string(),
                    path: file.to_path_buf(),
                });
            }

            // Independent of the exact-match outcome: every shaded version
            // of this library that differs from ours claims a slot.
            for conflict in
                index.conflicts(&artifact.group_id, &artifact.artifact_id, &artifact.version)
            {
                let path = self.placeholders.ensure(conflict)?;
                paths.push(path.clone());
                decisions.push(Decision::Placeholder {
                    coordinate: conflict.to_string(),
                    path,
                });
            }
        }

        Ok(Resolution { paths, decisions })
    }
}

/// Unions every artifact's shaded-manifest declarations into one index
fn build_shadow_index(artifacts: &[ResolvedArtifact]) -> ShadowIndex {
    ShadowIndex::from_coordinates(
        artifacts
            .iter()
            .flat_map(|artifact| read_shaded_manifest(artifact.file()).into_coordinates()),
    )
}
