use crate::error::{CalverError, Result};
use crate::git::{MergeCount, TagLookup};
use chrono::NaiveDate;
use std::cell::Cell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<String>,
    merges: HashMap<NaiveDate, u32>,
    failure: Option<String>,
    tag_calls: Cell<usize>,
    merge_calls: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            merges: HashMap::new(),
            failure: None,
            tag_calls: Cell::new(0),
            merge_calls: Cell::new(0),
        }
    }

    /// Create a mock repository holding the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut repo = Self::new();
        for tag in tags {
            repo.add_tag(tag);
        }
        repo
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Set the number of merges for a date
    pub fn set_merges(&mut self, date: NaiveDate, count: u32) {
        self.merges.insert(date, count);
    }

    /// Make every lookup fail with the given message
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    /// Number of times the tag snapshot was requested
    pub fn tag_calls(&self) -> usize {
        self.tag_calls.get()
    }

    /// Number of times a merge count was requested
    pub fn merge_calls(&self) -> usize {
        self.merge_calls.get()
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(CalverError::lookup(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagLookup for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        self.tag_calls.set(self.tag_calls.get() + 1);
        self.check_failure()?;
        Ok(self.tags.clone())
    }
}

impl MergeCount for MockRepository {
    fn count_merges_on(&self, date: NaiveDate) -> Result<u32> {
        self.merge_calls.set(self.merge_calls.get() + 1);
        self.check_failure()?;
        Ok(self.merges.get(&date).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_tags() {
        let repo = MockRepository::with_tags(["20250428.100", "20250428.100.1"]);
        let tags = repo.list_tags().unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&"20250428.100.1".to_string()));
        assert_eq!(repo.tag_calls(), 1);
    }

    #[test]
    fn test_mock_repository_merges() {
        let mut repo = MockRepository::new();
        let day = NaiveDate::from_ymd_opt(2025, 4, 28).unwrap();
        repo.set_merges(day, 4);

        assert_eq!(repo.count_merges_on(day).unwrap(), 4);
        assert_eq!(repo.count_merges_on(day.succ_opt().unwrap()).unwrap(), 0);
        assert_eq!(repo.merge_calls(), 2);
    }

    #[test]
    fn test_mock_repository_failure() {
        let mut repo = MockRepository::with_tags(["20250428.100"]);
        repo.fail_with("remote unavailable");

        let err = repo.list_tags().unwrap_err();
        assert!(err.is_lookup_failure());
        assert!(err.to_string().contains("remote unavailable"));
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
    }
}
