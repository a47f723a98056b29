use std::path::PathBuf;

/// Reasons an annotate run stops before writing the commit message.
#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    #[error("git is not available, please install or enable it and try again")]
    IntegrationUnavailable,

    #[error("no git repositories found")]
    NoRepositories,

    #[error("invalid repo: no repository rooted at {}", .0.display())]
    RepositoryNotFound(PathBuf),

    #[error("repository {} has no HEAD", .0.display())]
    HeadUnavailable(PathBuf),

    #[error("HEAD of repository {} has no name (detached HEAD?)", .0.display())]
    HeadUnnamed(PathBuf),

    #[error("work time input cancelled")]
    Cancelled,

    #[error("invalid work time! [{0}]")]
    InvalidDuration(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnnotateError {
    /// Whether this should be reported as an error. Cancelling the prompt is
    /// a deliberate choice and is only reported as a notice.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_duration_echoes_value() {
        let err = AnnotateError::InvalidDuration("abc".to_string());
        assert_eq!(err.to_string(), "invalid work time! [abc]");
    }

    #[test]
    fn test_cancel_is_not_an_error() {
        assert!(!AnnotateError::Cancelled.is_error());
        assert!(AnnotateError::NoRepositories.is_error());
        assert!(AnnotateError::Other(anyhow::anyhow!("boom")).is_error());
    }
}
