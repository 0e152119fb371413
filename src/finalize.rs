//! Promotion of the draft section into a dated release.
//!
//! Each variant comes in two forms: a pure `*_lines` function that takes the
//! current content and date and returns the new content, and a file-level
//! function that reads the changelog, uses today's local date and overwrites
//! the file. Nothing is written unless every precondition holds.

use std::fmt::Display;
use std::path::Path;

use chrono::{Local, NaiveDate};
use semver::Version;
use tracing::{debug, info};

use crate::changelog::{read_lines, write_lines};
use crate::domain::links::reference_links;
use crate::domain::release::Changelog;
use crate::domain::section::{is_release_head, scan, Section};
use crate::domain::version::parse_version;
use crate::error::{ChangelogError, Result};
use crate::git::Repository;

/// Formats the head of a released section, e.g. `## [1.2.0] / 2024-05-01`.
pub fn release_header(tag: impl Display, date: NaiveDate) -> String {
    format!("## [{}] / {}", tag, date.format("%Y-%m-%d"))
}

/// Releases the draft of a parsed changelog as `tag`.
///
/// # Arguments
/// * `changelog` - Changelog read from `lines`
/// * `lines` - Current content of the changelog file
/// * `tag` - Version to release
/// * `date` - Date written into the new header
///
/// # Errors
/// * `NoDraftSection` - The changelog has no unreleased section
/// * `DuplicateTag` - `tag` is already a released version
/// * `VersionOrder` - `tag` is not greater than the latest released version
pub fn finalize_lines<S: AsRef<str>>(
    changelog: &Changelog,
    lines: &[S],
    tag: &Version,
    date: NaiveDate,
) -> Result<Vec<String>> {
    let unreleased = changelog.unreleased.as_ref().ok_or_else(|| {
        ChangelogError::no_draft(format!(
            "'{}' has no unreleased section to release as '{}'",
            changelog.path.display(),
            tag
        ))
    })?;

    if changelog.versions().any(|version| version == tag) {
        return Err(ChangelogError::DuplicateTag(tag.to_string()));
    }

    if let Some(latest) = changelog.latest_version() {
        if tag <= latest {
            return Err(ChangelogError::version_order(tag, latest));
        }
    }

    let head = unreleased.start_index;
    if !lines.get(head).is_some_and(|line| is_release_head(line.as_ref())) {
        return Err(ChangelogError::no_draft(format!(
            "'{}' changed since it was read; line {} no longer opens '{}'",
            changelog.path.display(),
            head + 1,
            unreleased.caption
        )));
    }

    let mut content = to_owned_lines(lines);
    content.insert(head + 1, String::new());
    content.insert(head + 2, release_header(tag, date));
    finish(&mut content);

    debug!(tag = %tag, header = head + 2, "inserted release header");
    Ok(content)
}

/// Releases the draft of `changelog` as `tag` and overwrites its file.
pub fn finalize(changelog: &Changelog, tag: &Version) -> Result<()> {
    info!(path = %changelog.path.display(), tag = %tag, "finalizing changelog");
    let lines = read_lines(&changelog.path)?;
    let content = finalize_lines(changelog, &lines, tag, today())?;
    write_lines(&changelog.path, &content)
}

/// Releases the first section of `lines` as `tag`.
///
/// When `repository` is a hosted repository, the trailing block of reference
/// links is rebuilt so that every section links to its changes.
///
/// # Errors
/// * `EmptyChangelog` - No release sections at all
/// * `NoDraftSection` - The first caption is not purely alphabetic
/// * `DuplicateTag` - A section caption equals `tag`, ignoring case
/// * `EmptyDraft` - The first section has no notes
/// * `VersionOrder` - `tag` is not greater than the second section's version
/// * `Version` - `tag` or the second caption is not a version
pub fn finalize_tag_lines<S: AsRef<str>>(
    lines: &[S],
    tag: &str,
    repository: Option<&dyn Repository>,
    date: NaiveDate,
) -> Result<Vec<String>> {
    let sections: Vec<Section> = scan(lines).collect();
    let draft = sections.first().ok_or(ChangelogError::EmptyChangelog)?;

    if !is_draft_caption(&draft.caption) {
        return Err(ChangelogError::no_draft(format!(
            "first section '{}' is not a draft, cannot release '{}'",
            draft.caption, tag
        )));
    }

    if sections
        .iter()
        .any(|section| section.caption.eq_ignore_ascii_case(tag))
    {
        return Err(ChangelogError::DuplicateTag(tag.to_string()));
    }

    if draft.is_empty() {
        return Err(ChangelogError::EmptyDraft(draft.caption.clone()));
    }

    if let Some(previous) = sections.get(1) {
        if parse_version(tag)? <= parse_version(&previous.caption)? {
            return Err(ChangelogError::version_order(tag, &previous.caption));
        }
    }

    let mut content = to_owned_lines(lines);
    content.insert(draft.start_index + 1, String::new());
    content.insert(draft.start_index + 2, release_header(tag, date));

    match repository {
        Some(repository) if repository.is_hosted() => {
            rewrite_links(&mut content, repository.url_base());
        }
        Some(repository) => {
            debug!(url = repository.url_base(), "repository is not hosted, keeping links");
        }
        None => {}
    }

    finish(&mut content);
    Ok(content)
}

/// Releases the first section of the changelog at `path` as `tag`.
pub fn finalize_tag(path: &Path, tag: &str, repository: Option<&dyn Repository>) -> Result<()> {
    info!(path = %path.display(), tag, "finalizing changelog");
    let lines = read_lines(path)?;
    let content = finalize_tag_lines(&lines, tag, repository, today())?;
    write_lines(path, &content)
}

/// Drops everything after the last section and appends fresh reference links.
fn rewrite_links(content: &mut Vec<String>, url_base: &str) {
    let sections: Vec<Section> = scan(content.as_slice()).collect();
    if let Some(last) = sections.last() {
        content.truncate(last.end_index + 1);
    }

    content.push(String::new());
    content.extend(reference_links(&sections, url_base));
    debug!(links = sections.len(), url_base, "rewrote reference links");
}

fn is_draft_caption(caption: &str) -> bool {
    !caption.is_empty() && caption.chars().all(char::is_alphabetic)
}

/// Ends the document with exactly one blank line.
fn finish(content: &mut Vec<String>) {
    while content.last().is_some_and(|line| line.trim().is_empty()) {
        content.pop();
    }
    content.push(String::new());
}

fn to_owned_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| line.as_ref().to_string()).collect()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
