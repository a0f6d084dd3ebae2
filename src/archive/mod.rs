//! # Archive Layer
//!
//! Filesystem and jar/zip I/O for shadeplan.
//!
//! - [`read_shaded_manifest`] extracts the embedded shaded-dependency
//!   manifest (`META-INF/DEPENDENCIES.MF`) from a single archive. All read
//!   failures fold into an empty result; a broken jar never aborts a
//!   resolution.
//! - [`PlaceholderStore`] creates and reuses empty placeholder archives on
//!   disk, keyed by file name. Creation failures are the one error class in
//!   this crate that propagates, since a missing placeholder would change
//!   classpath semantics downstream.

mod manifest;
mod placeholder;

pub use manifest::{read_shaded_manifest, ManifestOutcome, MANIFEST_ENTRY};
pub use placeholder::{PlaceholderStore, EMPTY_ARCHIVE};
