use thiserror::Error;

/// Unified error type for nearest-version operations
#[derive(Error, Debug)]
pub enum NearestVersionError {
    #[error("Repository access failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository access failed: {0}")]
    RepositoryAccess(String),

    #[error("Repository has no commits")]
    NoHead,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag pattern error: {0}")]
    TagPattern(String),

    #[error("Version parsing error: {0}")]
    Version(String),
}

/// Convenience type alias for Results in nearest-version
pub type Result<T> = std::result::Result<T, NearestVersionError>;

impl NearestVersionError {
    /// Create a repository access error with context
    pub fn repository_access(msg: impl Into<String>) -> Self {
        NearestVersionError::RepositoryAccess(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NearestVersionError::Config(msg.into())
    }

    /// Create a tag pattern error with context
    pub fn tag_pattern(msg: impl Into<String>) -> Self {
        NearestVersionError::TagPattern(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        NearestVersionError::Version(msg.into())
    }

    /// Whether this error came from the repository backend.
    ///
    /// These are the only failures `locate()` lets through to its caller.
    pub fn is_repository_access(&self) -> bool {
        matches!(
            self,
            NearestVersionError::Git(_) | NearestVersionError::RepositoryAccess(_)
        )
    }
}
