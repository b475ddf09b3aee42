//! Injected git capabilities
//!
//! Version computation never talks to git directly. It receives the evidence
//! it needs through two small traits:
//!
//! - [TagLookup]: the current snapshot of tag names
//! - [MergeCount]: how many merges landed on a given day
//!
//! Concrete implementations:
//!
//! - [repository::Git2Repository]: a real repository read through `git2`
//! - [repository::RepositoryPath]: opens the repository only on first use
//! - [mock::MockRepository]: in-memory evidence for tests
//!
//! Closures also implement [TagLookup], which keeps one-off tests short:
//!
//! ```rust
//! # use calver_ci::git::TagLookup;
//! # use calver_ci::Result;
//! let lookup = || -> Result<Vec<String>> { Ok(vec!["20250428.100".to_string()]) };
//! assert_eq!(lookup.list_tags().unwrap().len(), 1);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::{Git2Repository, RepositoryPath};

use crate::error::Result;
use chrono::NaiveDate;

/// Source of the tag snapshot
///
/// The returned collection is unordered evidence; duplicates are harmless.
/// Implementations report their own failures and must not retry on behalf
/// of the caller.
pub trait TagLookup {
    /// List every tag name currently known
    fn list_tags(&self) -> Result<Vec<String>>;
}

/// Source of the daily merge count used for release-candidate sequencing
pub trait MergeCount {
    /// Number of merge commits on the mainline dated `date`
    fn count_merges_on(&self, date: NaiveDate) -> Result<u32>;
}

impl<F> TagLookup for F
where
    F: Fn() -> Result<Vec<String>>,
{
    fn list_tags(&self) -> Result<Vec<String>> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalverError;

    #[test]
    fn test_closure_lookup() {
        let lookup = || -> Result<Vec<String>> { Ok(vec!["a".to_string(), "b".to_string()]) };
        assert_eq!(lookup.list_tags().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_closure_lookup_failure() {
        let lookup = || -> Result<Vec<String>> { Err(CalverError::lookup("offline")) };
        assert!(lookup.list_tags().unwrap_err().is_lookup_failure());
    }
}
