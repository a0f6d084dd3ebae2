//! Domain models for shadeplan
//!
//! Contains the coordinate matching logic without any I/O concerns.

mod coordinate;
mod artifact;
mod shadow;

pub use coordinate::{CoordinateError, LibraryCoordinate};
pub use artifact::ResolvedArtifact;
pub use shadow::ShadowIndex;
