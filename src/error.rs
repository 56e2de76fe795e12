use thiserror::Error;

/// Unified error type for verbump operations
#[derive(Error, Debug)]
pub enum VerbumpError {
    #[error("Invalid version format: '{0}' - expected MAJOR.MINOR.PATCH")]
    InvalidFormat(String),

    #[error("Invalid {component} version component: '{value}'")]
    InvalidNumericComponent {
        component: &'static str,
        value: String,
    },

    #[error("Invalid pre-release counter: '{0}'")]
    InvalidPreReleaseCounter(String),

    #[error("Invalid pre-release label: '{0}'")]
    InvalidPreReleaseLabel(String),

    #[error("Invalid version change type: '{0}'")]
    InvalidChangeType(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("No version source: {0}")]
    VersionSource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in verbump
pub type Result<T> = std::result::Result<T, VerbumpError>;

impl VerbumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VerbumpError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VerbumpError::Tag(msg.into())
    }

    /// Create a version source error with context
    pub fn version_source(msg: impl Into<String>) -> Self {
        VerbumpError::VersionSource(msg.into())
    }
}
