//! Date layout shared by every version path.
//!
//! The layout decides how the date is rendered into a version and, from the
//! same definition, what final tags and release branches must look like.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::branch::RELEASE_BRANCH_PREFIX;
use crate::error::Result;

/// Calendar date layout used in versions, tags and release branch names
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DateLayout {
    /// `YYYYMMDD`
    #[default]
    Compact,
    /// `YYYY.MM.DD`
    Dotted,
}

impl DateLayout {
    /// strftime format for this layout
    pub fn strftime(&self) -> &'static str {
        match self {
            DateLayout::Compact => "%Y%m%d",
            DateLayout::Dotted => "%Y.%m.%d",
        }
    }

    /// Regex fragment matching a date rendered in this layout
    pub fn date_pattern(&self) -> &'static str {
        match self {
            DateLayout::Compact => r"\d{8}",
            DateLayout::Dotted => r"\d{4}\.\d{2}\.\d{2}",
        }
    }

    /// Render a date; no locale or timezone conversion is applied.
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.strftime()).to_string()
    }

    /// Matches final tags: `DATE.BUILD` or `DATE.BUILD.PATCH`
    pub fn final_tag_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&format!(
            r"^{}\.\d+(?:\.\d+)?$",
            self.date_pattern()
        ))?)
    }

    /// Matches `release/v<DATE.BUILD>` and captures the base
    pub fn release_branch_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&format!(
            r"^{}v({}\.\d+)$",
            regex::escape(RELEASE_BRANCH_PREFIX),
            self.date_pattern()
        ))?)
    }

    /// Extract the base identifier from a release branch name
    pub fn release_base<'a>(&self, branch: &'a str) -> Result<Option<&'a str>> {
        let re = self.release_branch_regex()?;
        Ok(re
            .captures(branch)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str()))
    }
}
