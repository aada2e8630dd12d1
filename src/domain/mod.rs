//! Domain logic - pure types and parsing independent of git operations

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::Commit;
pub use tag::{strip_tag_prefix, Tag};
pub use version::Version;
