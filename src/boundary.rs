use std::fmt;

/// Non-fatal observations made while computing a version.
///
/// The core never prints these; they ride along with the result so the
/// caller can decide whether to show them.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// History-based feature build found no tags at all and used a seed base
    SeededFromDate { seed: String },
    /// Tag belongs to a patch or RC family but its number could not be used
    IgnoredTag { tag: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::SeededFromDate { seed } => {
                write!(f, "No tags found; seeding first build from '{}'", seed)
            }
            BoundaryWarning::IgnoredTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_display() {
        let warning = BoundaryWarning::SeededFromDate {
            seed: "20250428.0".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("No tags found"), "got: {}", msg);
        assert!(msg.contains("20250428.0"), "got: {}", msg);
    }

    #[test]
    fn test_ignored_tag_display() {
        let warning = BoundaryWarning::IgnoredTag {
            tag: "20250428.100.99999999999".to_string(),
            reason: "number out of range".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("Ignoring tag '20250428.100.99999999999'"));
        assert!(msg.contains("number out of range"));
    }
}
