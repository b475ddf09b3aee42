use crate::error::{CalverError, Result};
use crate::git::{MergeCount, TagLookup};
use chrono::{DateTime, FixedOffset, NaiveDate};
use git2::{Repository as Git2Repo, Sort};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository exposing the lookup capabilities
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

/// Repository location that is only opened when evidence is requested.
///
/// Builds that need no tag history succeed even outside a git checkout.
pub struct RepositoryPath {
    path: PathBuf,
}

impl RepositoryPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RepositoryPath { path: path.into() }
    }
}

impl TagLookup for RepositoryPath {
    fn list_tags(&self) -> Result<Vec<String>> {
        Git2Repository::open(&self.path)?.list_tags()
    }
}

impl MergeCount for RepositoryPath {
    fn count_merges_on(&self, date: NaiveDate) -> Result<u32> {
        Git2Repository::open(&self.path)?.count_merges_on(date)
    }
}

/// Calendar date of a commit in the commit's own offset
fn commit_date(time: git2::Time) -> Result<NaiveDate> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(|| {
        CalverError::lookup(format!("Invalid commit offset: {}", time.offset_minutes()))
    })?;
    let utc = DateTime::from_timestamp(time.seconds(), 0).ok_or_else(|| {
        CalverError::lookup(format!("Invalid commit time: {}", time.seconds()))
    })?;

    Ok(utc.with_timezone(&offset).date_naive())
}

impl TagLookup for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        // Non-UTF-8 names stay in the snapshot as non-matching evidence.
        Ok(tags
            .iter_bytes()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect())
    }
}

impl MergeCount for Git2Repository {
    fn count_merges_on(&self, date: NaiveDate) -> Result<u32> {
        let mut revwalk = self.repo.revwalk()?;

        revwalk.push_head()?;
        revwalk.simplify_first_parent()?;
        revwalk.set_sorting(Sort::TIME)?;

        let mut count = 0;

        for oid_result in revwalk {
            let commit = self.repo.find_commit(oid_result?)?;

            if commit.parent_count() > 1 && commit_date(commit.time())? == date {
                count += 1;
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_date_uses_commit_offset() {
        // 2025-04-28T23:30:00Z is already 2025-04-29 at +02:00
        let time = git2::Time::new(1_745_883_000, 120);
        assert_eq!(
            commit_date(time).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 29).unwrap()
        );

        let utc = git2::Time::new(1_745_883_000, 0);
        assert_eq!(
            commit_date(utc).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 28).unwrap()
        );
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Git2Repository::open(dir.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn test_repository_path_reports_lookup_failure() {
        let dir = tempfile::tempdir().unwrap();
        let lookup = RepositoryPath::new(dir.path().join("missing"));
        let err = lookup.list_tags().unwrap_err();
        assert!(err.is_lookup_failure());
    }
}
