//! Domain logic - pure versioning rules independent of git operations

pub mod branch;
pub mod layout;
pub mod tag;
pub mod version;

pub use branch::{classify, BuildKind};
pub use layout::DateLayout;
pub use tag::Sequence;
pub use version::{apply_prefix, apply_suffix};
