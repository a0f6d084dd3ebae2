//! Shaded-dependency manifest extraction
//!
//! Artifacts that bundle (shade) other libraries declare them in a
//! `META-INF/DEPENDENCIES.MF` entry, one coordinate per line. Reading is
//! strictly best-effort: a missing archive, a missing entry, a corrupt zip
//! or a malformed line must never fail the overall resolution.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::domain::LibraryCoordinate;

/// Archive entry holding the shaded-dependency manifest
pub const MANIFEST_ENTRY: &str = "META-INF/DEPENDENCIES.MF";

/// Result of reading one archive's shaded-dependency manifest
///
/// `Missing` and `Unreadable` both fold to an empty coordinate set, but
/// stay distinct so callers and tests can tell "declares nothing" from
/// "declares something we could not read".
#[derive(Debug, PartialEq, Eq)]
pub enum ManifestOutcome {
    /// No file path, no archive on disk, or no manifest entry inside it
    Missing,
    /// The archive or its manifest entry exists but could not be read
    Unreadable,
    /// Manifest found; malformed lines already dropped
    Parsed(HashSet<LibraryCoordinate>),
}

impl ManifestOutcome {
    /// Folds all variants into a coordinate set (empty unless parsed)
    pub fn into_coordinates(self) -> HashSet<LibraryCoordinate> {
        match self {
            ManifestOutcome::Parsed(coordinates) => coordinates,
            ManifestOutcome::Missing | ManifestOutcome::Unreadable => HashSet::new(),
        }
    }
}

/// Reads the shaded-dependency manifest embedded in an archive
///
/// The archive is opened, read and closed before returning; no handle
/// outlives the call.
pub fn read_shaded_manifest(path: Option<&Path>) -> ManifestOutcome {
    let Some(path) = path else {
        return ManifestOutcome::Missing;
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return ManifestOutcome::Missing,
        Err(_) => return ManifestOutcome::Unreadable,
    };

    let mut archive = match ZipArchive::new(BufReader::new(file)) {
        Ok(archive) => archive,
        Err(_) => return ManifestOutcome::Unreadable,
    };

    let mut entry = match archive.by_name(MANIFEST_ENTRY) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return ManifestOutcome::Missing,
        Err(_) => return ManifestOutcome::Unreadable,
    };

    let mut content = String::new();
    if entry.read_to_string(&mut content).is_err() {
        return ManifestOutcome::Unreadable;
    }

    ManifestOutcome::Parsed(parse_manifest(&content))
}

/// Parses manifest text into a deduplicated coordinate set
///
/// Malformed lines are dropped individually; the rest of the manifest still
/// parses.
fn parse_manifest(content: &str) -> HashSet<LibraryCoordinate> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_jar(dir: &TempDir, name: &str, manifest: Option<&str>) -> PathBuf {
        let path = dir.path().join(name);
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        writer.start_file("com/example/Placeholder.class", options).unwrap();
        writer.write_all(&[0xCA, 0xFE, 0xBA, 0xBE]).unwrap();

        if let Some(manifest) = manifest {
            writer.start_file(MANIFEST_ENTRY, options).unwrap();
            writer.write_all(manifest.as_bytes()).unwrap();
        }

        writer.finish().unwrap();
        path
    }

    #[test]
    fn no_path_is_missing() {
        assert_eq!(read_shaded_manifest(None), ManifestOutcome::Missing);
    }

    #[test]
    fn absent_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.jar");
        assert_eq!(read_shaded_manifest(Some(&path)), ManifestOutcome::Missing);
    }

    #[test]
    fn archive_without_manifest_entry_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_jar(&dir, "plain.jar", None);
        assert_eq!(read_shaded_manifest(Some(&path)), ManifestOutcome::Missing);
    }

    #[test]
    fn non_zip_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.jar");
        std::fs::write(&path, b"not a zip archive").unwrap();
        assert_eq!(read_shaded_manifest(Some(&path)), ManifestOutcome::Unreadable);
    }

    #[test]
    fn parses_declared_dependencies() {
        let dir = TempDir::new().unwrap();
        let path = write_jar(
            &dir,
            "shaded.jar",
            Some("com.example:lib:1.0:compile:jar\norg.slf4j:slf4j-api:1.7.36:runtime:jar\n"),
        );

        let coordinates = read_shaded_manifest(Some(&path)).into_coordinates();
        assert_eq!(coordinates.len(), 2);
        assert!(coordinates
            .contains(&LibraryCoordinate::new("com.example", "lib", "1.0", "compile", "jar")));
    }

    #[test]
    fn malformed_lines_are_dropped_individually() {
        let dir = TempDir::new().unwrap();
        let path = write_jar(
            &dir,
            "partial.jar",
            Some("too:few:fields\ncom.example:lib:1.0:compile:jar\na:b:c:d:e:f\n\n"),
        );

        let coordinates = read_shaded_manifest(Some(&path)).into_coordinates();
        assert_eq!(coordinates.len(), 1);
        assert!(coordinates
            .contains(&LibraryCoordinate::new("com.example", "lib", "1.0", "compile", "jar")));
    }

    #[test]
    fn duplicate_lines_collapse() {
        let dir = TempDir::new().unwrap();
        let line = "com.example:lib:1.0:compile:jar\n";
        let path = write_jar(&dir, "dupes.jar", Some(&line.repeat(3)));

        let coordinates = read_shaded_manifest(Some(&path)).into_coordinates();
        assert_eq!(coordinates.len(), 1);
    }

    #[test]
    fn everything_malformed_still_parses_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_jar(&dir, "junk.jar", Some("one\ntwo:fields\n"));

        // Present-but-all-malformed is Parsed(empty), not Missing
        match read_shaded_manifest(Some(&path)) {
            ManifestOutcome::Parsed(coordinates) => assert!(coordinates.is_empty()),
            other => panic!("expected Parsed, got {:?}", other),
        }
    }
}
