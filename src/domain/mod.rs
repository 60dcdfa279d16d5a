//! Domain logic - pure version rules independent of git operations

pub mod stage;
pub mod tag;
pub mod version;

pub use stage::Stage;
pub use tag::{Tag, TagPattern, TaggedCommit, DEFAULT_TAG_PREFIX};
pub use version::{Version, VersionBump};
