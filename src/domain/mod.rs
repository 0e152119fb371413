//! Domain logic - pure changelog rules independent of files and git

pub mod links;
pub mod release;
pub mod section;
pub mod version;

pub use release::{Changelog, ReleaseNotes, ReleaseStatus};
pub use section::{scan, Section, Sections};
pub use version::{parse_version, try_parse_version};
