//! Shadeplan - shaded-dependency conflict resolution for container image layers
//!
//! Given a project's fully resolved artifact list, shadeplan decides which
//! artifact files to include in the image layers, which to omit because their
//! classes are already bundled (shaded) inside another artifact, and which
//! classpath slots to fill with an empty placeholder archive because a
//! conflicting version of the same library is shaded elsewhere.

pub mod domain;
pub mod archive;
pub mod resolver;
pub mod cli;

pub use domain::{CoordinateError, LibraryCoordinate, ResolvedArtifact, ShadowIndex};
pub use archive::{read_shaded_manifest, ManifestOutcome, PlaceholderStore};
pub use resolver::{Decision, DependencyResolver, Resolution, ResolveError};
