//! Library coordinates as declared in shaded-dependency manifests
//!
//! Manifest format: one dependency per line, five colon-separated fields
//! `groupId:artifactId:version:scope:type`, no escaping of colons within
//! fields. Lines with any other field count are malformed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid coordinate: expected 'groupId:artifactId:version:scope:type', got '{0}'")]
    Malformed(String),
}

/// A library coordinate from a shaded-dependency manifest
///
/// Equality and hashing cover all five fields; that is the dedup relation
/// used when building a [`super::ShadowIndex`]. The resolver's partial-key
/// queries (exact match, version conflict) live on the index, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LibraryCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
    pub packaging: String,
}

impl LibraryCoordinate {
    /// Creates a coordinate from its five fields
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: impl Into<String>,
        packaging: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: scope.into(),
            packaging: packaging.into(),
        }
    }

    /// File name used for this coordinate's placeholder archive
    ///
    /// Placeholders are keyed purely by this name, so two coordinates that
    /// agree on artifact/version/packaging share one placeholder file.
    pub fn placeholder_file_name(&self) -> String {
        format!("{}-{}.{}", self.artifact_id, self.version, self.packaging)
    }
}

impl fmt::Display for LibraryCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.scope, self.packaging
        )
    }
}

impl FromStr for LibraryCoordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        match fields.as_slice() {
            [group_id, artifact_id, version, scope, packaging] => {
                Ok(Self::new(*group_id, *artifact_id, *version, *scope, *packaging))
            }
            _ => Err(CoordinateError::Malformed(s.to_string())),
        }
    }
}

impl TryFrom<String> for LibraryCoordinate {
    type Error = CoordinateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LibraryCoordinate> for String {
    fn from(coordinate: LibraryCoordinate) -> Self {
        coordinate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_five_fields() {
        let coordinate: LibraryCoordinate = "com.example:lib:1.2.3:compile:jar".parse().unwrap();

        assert_eq!(coordinate.group_id, "com.example");
        assert_eq!(coordinate.artifact_id, "lib");
        assert_eq!(coordinate.version, "1.2.3");
        assert_eq!(coordinate.scope, "compile");
        assert_eq!(coordinate.packaging, "jar");
    }

    #[test]
    fn too_few_fields_rejected() {
        let result = "com.example:lib:1.2.3".parse::<LibraryCoordinate>();
        assert!(matches!(result, Err(CoordinateError::Malformed(_))));
    }

    #[test]
    fn too_many_fields_rejected() {
        let result = "com.example:lib:1.2.3:compile:jar:extra".parse::<LibraryCoordinate>();
        assert!(matches!(result, Err(CoordinateError::Malformed(_))));
    }

    #[test]
    fn empty_line_rejected() {
        assert!("".parse::<LibraryCoordinate>().is_err());
    }

    #[test]
    fn empty_fields_allowed() {
        // The manifest contract only constrains the field count
        let coordinate: LibraryCoordinate = "g:a:1.0::jar".parse().unwrap();
        assert_eq!(coordinate.scope, "");
    }

    #[test]
    fn display_round_trip() {
        let line = "org.slf4j:slf4j-api:1.7.36:runtime:jar";
        let coordinate: LibraryCoordinate = line.parse().unwrap();
        assert_eq!(coordinate.to_string(), line);
    }

    #[test]
    fn placeholder_file_name_uses_artifact_version_packaging() {
        let coordinate = LibraryCoordinate::new("com.example", "lib", "1.0", "compile", "jar");
        assert_eq!(coordinate.placeholder_file_name(), "lib-1.0.jar");
    }

    #[test]
    fn equality_covers_all_five_fields() {
        let a = LibraryCoordinate::new("g", "a", "1.0", "compile", "jar");
        let b = LibraryCoordinate::new("g", "a", "1.0", "runtime", "jar");
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn parse_display_round_trip(
            group in "[a-z][a-z0-9.]{0,15}",
            artifact in "[a-z][a-z0-9-]{0,15}",
            version in "[0-9]{1,2}\\.[0-9]{1,2}",
            scope in "compile|runtime|provided|test",
            packaging in "jar|war|zip",
        ) {
            let line = format!("{group}:{artifact}:{version}:{scope}:{packaging}");
            let coordinate: LibraryCoordinate = line.parse().unwrap();
            prop_assert_eq!(coordinate.to_string(), line);
        }

        #[test]
        fn wrong_field_count_never_parses(line in "[a-z:]{0,20}") {
            let fields = line.split(':').count();
            if fields != 5 {
                prop_assert!(line.parse::<LibraryCoordinate>().is_err());
            }
        }
    }
}
