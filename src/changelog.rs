//! File-level changelog reading.
//!
//! Every call re-reads the file and re-scans it; nothing is cached between calls.

use std::fs;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::domain::release::{read_release_notes_from_lines, Changelog, ReleaseNotes};
use crate::domain::section::scan;
use crate::error::{ChangelogError, Result};

/// Reads a text file into lines, without line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    trace!(path = %path.display(), lines = lines.len(), "read changelog");
    Ok(lines)
}

/// Overwrites a file with the given lines, each terminated by `\n`.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    fs::write(path, content)?;
    info!(path = %path.display(), lines = lines.len(), "wrote changelog");
    Ok(())
}

/// Reads the release notes of every section in the changelog at `path`.
///
/// # Returns
/// * `Ok(Vec<ReleaseNotes>)` - Notes in document order
/// * `Err(EmptyChangelog)` - If the file has no release sections
pub fn read_release_notes(path: &Path) -> Result<Vec<ReleaseNotes>> {
    let lines = read_lines(path)?;
    read_release_notes_from_lines(&lines)
}

/// Reads the changelog at `path` into its draft and released sections.
pub fn read_changelog(path: &Path) -> Result<Changelog> {
    let changelog = Changelog::new(path, read_release_notes(path)?)?;
    debug!(
        path = %path.display(),
        draft = changelog.unreleased.is_some(),
        released = changelog.release_notes.len(),
        "read changelog sections"
    );
    Ok(changelog)
}

/// Body lines of a section from a line buffer.
///
/// Without a tag, the first section that has body lines is used. With a tag,
/// the section whose caption matches it case-insensitively is used.
///
/// # Returns
/// * `Ok(Vec<String>)` - Body lines (may be empty if no section has any)
/// * `Err(SectionNotFound)` - If a tag was given and no section matches
pub fn section_notes<S: AsRef<str>>(lines: &[S], tag: Option<&str>) -> Result<Vec<String>> {
    let mut sections = scan(lines);
    let section = match tag {
        Some(tag) => Some(
            sections
                .find(|section| section.caption.eq_ignore_ascii_case(tag))
                .ok_or_else(|| ChangelogError::SectionNotFound(tag.to_string()))?,
        ),
        None => sections.find(|section| !section.is_empty()),
    };

    Ok(section
        .map(|section| {
            section
                .body(lines)
                .iter()
                .map(|line| line.as_ref().to_string())
                .collect()
        })
        .unwrap_or_default())
}

/// Extracts the notes of one section from the changelog at `path`.
pub fn extract_section_notes(path: &Path, tag: Option<&str>) -> Result<Vec<String>> {
    let lines = read_lines(path)?;
    section_notes(&lines, tag)
}
