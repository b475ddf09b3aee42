//! Version sequencing for a single CI invocation

pub mod context;

pub use context::{BuildContext, VersionPlan};
