use thiserror::Error;

/// Unified error type for gitr operations
#[derive(Error, Debug)]
pub enum GitrError {
    #[error("{target} is not in a git repo")]
    NotARepository { target: String },

    #[error("{target} is already bumped")]
    AlreadyBumped { target: String },

    #[error("{target} not found")]
    TargetNotFound { target: String },

    #[error("No version found in {target} ['{content}']")]
    NoVersionFound { target: String, content: String },

    #[error("'{version}' is not a recognized version format")]
    UnrecognizedVersionFormat { version: String },

    #[error("{first} and {second} are mutually exclusive")]
    MutuallyExclusiveFlags {
        first: &'static str,
        second: &'static str,
    },

    #[error("Don't know where to put '{version}' in '{content}'")]
    AmbiguousRewriteTarget { version: String, content: String },

    #[error("Can't update '{version}' in an empty file")]
    EmptyFileOnUpdate { version: String },

    #[error("'{version}' not found in '{content}'")]
    OldVersionNotFound { version: String, content: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitr
pub type Result<T> = std::result::Result<T, GitrError>;

impl GitrError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitrError::Config(msg.into())
    }

    pub fn not_a_repository(target: impl Into<String>) -> Self {
        GitrError::NotARepository {
            target: target.into(),
        }
    }

    pub fn unrecognized(version: impl Into<String>) -> Self {
        GitrError::UnrecognizedVersionFormat {
            version: version.into(),
        }
    }
}
