pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod sequencer;
pub mod ui;

pub use error::{CalverError, Result};
pub use sequencer::{BuildContext, VersionPlan};
