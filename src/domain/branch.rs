use std::fmt;

/// Branch name prefix that marks a release branch
pub const RELEASE_BRANCH_PREFIX: &str = "release/";

/// Kind of build, derived from the branch being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    /// The configured default (trunk) branch
    Default,
    /// A `release/...` branch
    Release,
    /// Anything else
    Feature,
}

/// Classify a branch against the configured default branch name.
///
/// The default branch wins over the release prefix, so a deployment whose
/// trunk is literally named `release/...` still gets default builds. The
/// release branch syntax is not validated here.
pub fn classify(default_branch: &str, branch: &str) -> BuildKind {
    if branch == default_branch {
        BuildKind::Default
    } else if branch.starts_with(RELEASE_BRANCH_PREFIX) {
        BuildKind::Release
    } else {
        BuildKind::Feature
    }
}

impl fmt::Display for BuildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildKind::Default => write!(f, "default"),
            BuildKind::Release => write!(f, "release"),
            BuildKind::Feature => write!(f, "feature"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_branch() {
        assert_eq!(classify("main", "main"), BuildKind::Default);
        assert_eq!(classify("trunk", "trunk"), BuildKind::Default);
    }

    #[test]
    fn test_release_branch() {
        assert_eq!(
            classify("main", "release/v20250428.100"),
            BuildKind::Release
        );
    }

    #[test]
    fn test_malformed_release_branch_still_release() {
        assert_eq!(classify("main", "release/vBAD"), BuildKind::Release);
        assert_eq!(classify("main", "release/"), BuildKind::Release);
    }

    #[test]
    fn test_default_wins_over_release_prefix() {
        assert_eq!(classify("release/x", "release/x"), BuildKind::Default);
    }

    #[test]
    fn test_feature_branch() {
        assert_eq!(classify("main", "feature/foo"), BuildKind::Feature);
        assert_eq!(classify("main", "master"), BuildKind::Feature);
        assert_eq!(classify("main", "releases/v1"), BuildKind::Feature);
        assert_eq!(classify("main", ""), BuildKind::Feature);
    }

    #[test]
    fn test_display() {
        assert_eq!(BuildKind::Default.to_string(), "default");
        assert_eq!(BuildKind::Release.to_string(), "release");
        assert_eq!(BuildKind::Feature.to_string(), "feature");
    }
}
