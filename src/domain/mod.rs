//! Domain logic - pure versioning rules independent of git operations

pub mod magnitude;
pub mod prerelease;
pub mod version;

pub use magnitude::ChangeMagnitude;
pub use prerelease::PreRelease;
pub use version::{increment, pre_release_label, version_from_tag, SemanticVersion};
