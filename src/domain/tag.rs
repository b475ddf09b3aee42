//! Scans over a tag snapshot.
//!
//! Tags are read-only evidence. Order and duplicates in the snapshot never
//! change a result.

use regex::Regex;

use crate::domain::DateLayout;
use crate::error::Result;

/// Next number in a patch or release-candidate family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Strictly greater than every parsed number in the family; 1 for a new family
    pub next: u128,
    /// Tags that matched the family but whose number did not parse
    pub ignored: Vec<String>,
}

/// Greatest final tag by string comparison.
///
/// Final tags use fixed-width zero-padded dates, so the lexicographic maximum
/// is also the most recent date.
pub fn latest_final_tag<'a>(tags: &'a [String], layout: DateLayout) -> Result<Option<&'a str>> {
    let re = layout.final_tag_regex()?;
    Ok(tags
        .iter()
        .map(String::as_str)
        .filter(|tag| re.is_match(tag))
        .max())
}

/// Next patch number for `base`, from tags shaped `<base>.<patch>`
pub fn next_patch(tags: &[String], base: &str) -> Result<Sequence> {
    let re = Regex::new(&format!(r"^{}\.(\d+)$", regex::escape(base)))?;
    Ok(next_in_family(tags, &re))
}

/// Next release-candidate number for `base`, from tags shaped `<base>-RC<n>`
pub fn next_candidate(tags: &[String], base: &str) -> Result<Sequence> {
    let re = Regex::new(&format!(r"^{}-RC(\d+)$", regex::escape(base)))?;
    Ok(next_in_family(tags, &re))
}

/// `re` must capture the number as group 1
fn next_in_family(tags: &[String], re: &Regex) -> Sequence {
    let mut max: u64 = 0;
    let mut ignored = Vec::new();

    for tag in tags {
        let Some(number) = re.captures(tag).and_then(|caps| caps.get(1)) else {
            continue;
        };
        match number.as_str().parse::<u64>() {
            Ok(n) => max = max.max(n),
            Err(_) => ignored.push(tag.clone()),
        }
    }

    Sequence {
        next: u128::from(max) + 1,
        ignored,
    }
}
