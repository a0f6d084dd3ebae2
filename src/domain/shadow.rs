//! Index of library coordinates already shaded inside some artifact
//!
//! Built once per resolve call from every artifact's embedded manifest,
//! immutable thereafter. Two lookup structures back the two queries the
//! resolver needs: a full five-field set for dedup during construction, and
//! a map keyed by (group, artifact) for the exact-match and conflict checks.

use std::collections::{HashMap, HashSet};

use super::coordinate::LibraryCoordinate;

/// The "already present somewhere" index over shaded library coordinates
#[derive(Debug, Default)]
pub struct ShadowIndex {
    /// All distinct coordinates, five-field equality
    coordinates: HashSet<LibraryCoordinate>,

    /// Coordinates grouped by (group_id, artifact_id), sorted for
    /// deterministic conflict ordering
    by_library: HashMap<(String, String), Vec<LibraryCoordinate>>,
}

impl ShadowIndex {
    /// Builds an index from the union of all shaded coordinates
    ///
    /// Insertion order does not matter; duplicates collapse to one entry.
    pub fn from_coordinates(coordinates: impl IntoIterator<Item = LibraryCoordinate>) -> Self {
        let mut index = Self::default();

        for coordinate in coordinates {
            if !index.coordinates.insert(coordinate.clone()) {
                continue;
            }
            index
                .by_library
                .entry((coordinate.group_id.clone(), coordinate.artifact_id.clone()))
                .or_default()
                .push(coordinate);
        }

        for entries in index.by_library.values_mut() {
            entries.sort_by(|a, b| {
                (&a.version, &a.packaging, &a.scope).cmp(&(&b.version, &b.packaging, &b.scope))
            });
        }

        index
    }

    /// True if some shaded coordinate matches on group, artifact and version
    ///
    /// Scope and packaging are ignored; an exact match means the artifact's
    /// classes are already present inside another included artifact.
    pub fn contains_exact(&self, group_id: &str, artifact_id: &str, version: &str) -> bool {
        self.entries_for(group_id, artifact_id)
            .iter()
            .any(|entry| entry.version == version)
    }

    /// All shaded coordinates sharing (group, artifact) but not the version
    ///
    /// Several different versions of the same library can each be shaded in
    /// different artifacts, so this can return more than one entry. The
    /// result is sorted by version, then packaging, then scope.
    pub fn conflicts(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
    ) -> Vec<&LibraryCoordinate> {
        self.entries_for(group_id, artifact_id)
            .iter()
            .filter(|entry| entry.version != version)
            .collect()
    }

    /// Number of distinct coordinates in the index
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// True if no artifact declared any shaded dependency
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    fn entries_for(&self, group_id: &str, artifact_id: &str) -> &[LibraryCoordinate] {
        self.by_library
            .get(&(group_id.to_string(), artifact_id.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
