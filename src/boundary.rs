use std::fmt;

/// Warnings that occur around the edges of a changelog operation.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository could not be opened, so no links are written
    RemoteUnavailable { remote: String, reason: String },
    /// Links were not rebuilt
    LinksSkipped { reason: String },
    /// The selected section has no notes
    EmptyNotes { tag: Option<String> },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::RemoteUnavailable { remote, reason } => {
                write!(f, "Cannot read remote '{}': {}", remote, reason)
            }
            BoundaryWarning::LinksSkipped { reason } => {
                write!(f, "Reference links not updated: {}", reason)
            }
            BoundaryWarning::EmptyNotes { tag: Some(tag) } => {
                write!(f, "Section '{}' has no release notes", tag)
            }
            BoundaryWarning::EmptyNotes { tag: None } => {
                write!(f, "No section has release notes")
            }
        }
    }
}
