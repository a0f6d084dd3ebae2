//! Empty placeholder archives
//!
//! When a conflicting version of a library is already shaded elsewhere, the
//! colliding classpath slot is filled with an inert empty archive so later
//! stages keep their position/count expectations without duplicating class
//! bytes. Placeholders are scratch files keyed purely by file name; identical
//! content makes concurrent creation races benign.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::LibraryCoordinate;

/// A zip archive with no entries: the 22-byte end-of-central-directory record
pub const EMPTY_ARCHIVE: [u8; 22] = [
    0x50, 0x4B, 0x05, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Store for placeholder archives under a single directory
pub struct PlaceholderStore {
    dir: PathBuf,
}

impl PlaceholderStore {
    /// Creates a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store under the platform temporary directory
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir())
    }

    /// Returns the directory placeholders are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ensures a placeholder exists for the coordinate, returning its path
    ///
    /// The file is named `artifactId-version.type` and written exactly once;
    /// later calls (including from other processes) reuse the existing file.
    /// "Already exists" is success, not an error.
    pub fn ensure(&self, coordinate: &LibraryCoordinate) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!(
                "Failed to create placeholder directory: {}",
                self.dir.display()
            )
        })?;

        let path = self.dir.join(coordinate.placeholder_file_name());

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(&EMPTY_ARCHIVE).with_context(|| {
                    format!("Failed to write placeholder: {}", path.display())
                })?;
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to create placeholder: {}", path.display())
                });
            }
        }

        Ok(path)
    }
}
