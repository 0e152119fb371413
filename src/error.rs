use thiserror::Error;

/// Unified error type for changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Changelog contains no release sections")]
    EmptyChangelog,

    #[error("Changelog has more than one draft section: {}", .0.join(", "))]
    MultipleDraftSections(Vec<String>),

    #[error("Changelog has neither a draft section nor a released version")]
    NoReleasedVersion,

    #[error("No section found for tag '{0}'")]
    SectionNotFound(String),

    #[error("No draft section: {0}")]
    NoDraftSection(String),

    #[error("Tag '{0}' already exists in the changelog")]
    DuplicateTag(String),

    #[error("Draft section '{0}' has no release notes")]
    EmptyDraft(String),

    #[error("Version '{tag}' must be greater than latest version '{latest}'")]
    VersionOrder { tag: String, latest: String },

    #[error("Version parsing error: '{input}': {source}")]
    Version {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog-publish
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a missing-draft error with context
    pub fn no_draft(msg: impl Into<String>) -> Self {
        ChangelogError::NoDraftSection(msg.into())
    }

    /// Create a version ordering error from the rejected tag and the version it must exceed
    pub fn version_order(tag: impl ToString, latest: impl ToString) -> Self {
        ChangelogError::VersionOrder {
            tag: tag.to_string(),
            latest: latest.to_string(),
        }
    }
}
