use chrono::{NaiveDate, NaiveDateTime};

use crate::boundary::BoundaryWarning;
use crate::config::{Config, DefaultScheme, FeatureBase};
use crate::domain::{apply_prefix, apply_suffix, classify, tag, BuildKind, Sequence};
use crate::error::{CalverError, Result};
use crate::git::{MergeCount, TagLookup};

/// Everything one CI invocation knows when asking for a version.
///
/// Built fresh per invocation and discarded afterwards. All history comes
/// from the injected lookups; nothing is cached between calls.
pub struct BuildContext<'a> {
    /// Branch being built
    pub branch: String,
    /// Pipeline identifier, used verbatim
    pub pipeline_id: String,
    /// Build time, already in the zone the date should be read in
    pub timestamp: NaiveDateTime,
    pub config: Config,
    pub tags: &'a dyn TagLookup,
    /// Only consulted by the release-candidate default scheme
    pub merges: Option<&'a dyn MergeCount>,
}

/// Outcome of a successful version computation
#[derive(Debug, Clone, PartialEq)]
pub struct VersionPlan {
    pub kind: BuildKind,
    pub version: String,
    pub notes: Vec<BoundaryWarning>,
}

impl<'a> BuildContext<'a> {
    /// Create a context without a merge count source
    pub fn new(
        branch: impl Into<String>,
        pipeline_id: impl Into<String>,
        timestamp: NaiveDateTime,
        config: Config,
        tags: &'a dyn TagLookup,
    ) -> Self {
        BuildContext {
            branch: branch.into(),
            pipeline_id: pipeline_id.into(),
            timestamp,
            config,
            tags,
            merges: None,
        }
    }

    /// Attach the merge count source used by release-candidate sequencing
    pub fn with_merges(mut self, merges: &'a dyn MergeCount) -> Self {
        self.merges = Some(merges);
        self
    }

    /// Compute the version string for this build
    pub fn version(&self) -> Result<String> {
        self.plan().map(|plan| plan.version)
    }

    /// Compute the version along with its build kind and any notes
    pub fn plan(&self) -> Result<VersionPlan> {
        let kind = classify(&self.config.default_branch, &self.branch);
        let mut notes = Vec::new();

        let value = match kind {
            BuildKind::Default => self.default_version(&mut notes)?,
            BuildKind::Feature => self.feature_version(&mut notes)?,
            BuildKind::Release => self.release_version(&mut notes)?,
        };

        Ok(VersionPlan {
            kind,
            version: apply_prefix(&value, &self.config.prefix),
            notes,
        })
    }

    fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    fn formatted_date(&self) -> String {
        self.config.layout.format(self.date())
    }

    fn default_version(&self, notes: &mut Vec<BoundaryWarning>) -> Result<String> {
        match self.config.default_scheme {
            DefaultScheme::Pipeline => {
                let mut value = format!("{}.{}", self.formatted_date(), self.pipeline_id);
                if self.config.pad_default {
                    value.push_str(".0");
                }
                Ok(value)
            }
            DefaultScheme::Candidate => self.candidate_version(notes),
        }
    }

    /// `<date>.<merges today>-RC<n>`
    fn candidate_version(&self, notes: &mut Vec<BoundaryWarning>) -> Result<String> {
        let merges = self.merges.ok_or_else(|| {
            CalverError::config("candidate scheme requires a merge count source")
        })?;

        let seq = merges.count_merges_on(self.date())?;
        let base = format!("{}.{}", self.formatted_date(), seq);

        let tags = self.tags.list_tags()?;
        let candidate = tag::next_candidate(&tags, &base)?;
        note_ignored(&candidate, notes);

        Ok(format!("{}-RC{}", base, candidate.next))
    }

    fn feature_version(&self, notes: &mut Vec<BoundaryWarning>) -> Result<String> {
        let base = match self.config.feature_base {
            FeatureBase::Date => self.formatted_date(),
            FeatureBase::LatestTag => self.latest_final_base(notes)?,
        };

        let value = format!("{}.{}", base, self.pipeline_id);
        Ok(apply_suffix(&value, &self.config.feature_suffix))
    }

    /// Greatest final tag; an empty snapshot seeds from the current date
    fn latest_final_base(&self, notes: &mut Vec<BoundaryWarning>) -> Result<String> {
        let tags = self.tags.list_tags()?;

        if tags.is_empty() {
            let seed = format!("{}.0", self.formatted_date());
            notes.push(BoundaryWarning::SeededFromDate { seed: seed.clone() });
            return Ok(seed);
        }

        match tag::latest_final_tag(&tags, self.config.layout)? {
            Some(latest) => Ok(latest.to_string()),
            None => Err(CalverError::NoMatchingFinalTag {
                scanned: tags.len(),
            }),
        }
    }

    /// `<base>.<next patch>` for a `release/v<base>` branch
    fn release_version(&self, notes: &mut Vec<BoundaryWarning>) -> Result<String> {
        let base = self
            .config
            .layout
            .release_base(&self.branch)?
            .ok_or_else(|| CalverError::invalid_release_branch(&self.branch))?;

        let tags = self.tags.list_tags()?;
        let patch = tag::next_patch(&tags, base)?;
        note_ignored(&patch, notes);

        Ok(format!("{}.{}", base, patch.next))
    }
}

fn note_ignored(sequence: &Sequence, notes: &mut Vec<BoundaryWarning>) {
    notes.extend(sequence.ignored.iter().map(|tag| BoundaryWarning::IgnoredTag {
        tag: tag.clone(),
        reason: "number out of range".to_string(),
    }));
}
