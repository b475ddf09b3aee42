use thiserror::Error;

/// Unified error type for version computation
#[derive(Error, Debug)]
pub enum CalverError {
    #[error("invalid release branch: {branch}")]
    InvalidReleaseBranch { branch: String },

    #[error("no matching final tag among {scanned} tags")]
    NoMatchingFinalTag { scanned: usize },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Tag pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in calver-ci
pub type Result<T> = std::result::Result<T, CalverError>;

impl CalverError {
    /// Create a release branch error for the offending branch
    pub fn invalid_release_branch(branch: impl Into<String>) -> Self {
        CalverError::InvalidReleaseBranch {
            branch: branch.into(),
        }
    }

    /// Create a lookup error with context
    pub fn lookup(msg: impl Into<String>) -> Self {
        CalverError::Lookup(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CalverError::Config(msg.into())
    }

    /// True when the error came from an injected tag or merge-count capability
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, CalverError::Git(_) | CalverError::Lookup(_))
    }
}
