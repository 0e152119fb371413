pub mod boundary;
pub mod changelog;
pub mod config;
pub mod domain;
pub mod error;
pub mod finalize;
pub mod git;
pub mod ui;

pub use changelog::{extract_section_notes, read_changelog, read_release_notes};
pub use error::{ChangelogError, Result};
pub use finalize::{finalize, finalize_tag};
