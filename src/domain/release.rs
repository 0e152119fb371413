use std::path::{Path, PathBuf};

use semver::Version;

use crate::domain::section::{scan, Section};
use crate::domain::version::try_parse_version;
use crate::error::{ChangelogError, Result};

/// Whether a section is the mutable draft or a tagged release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseStatus {
    Draft,
    Released(Version),
}

/// Release notes of one changelog section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub status: ReleaseStatus,
    /// Caption as written in the release head (version string or label)
    pub caption: String,
    /// Body lines, head excluded
    pub lines: Vec<String>,
    pub start_index: usize,
    pub end_index: usize,
}

impl ReleaseNotes {
    /// Build release notes for a scanned section; unparseable captions mark a draft.
    pub fn from_section<S: AsRef<str>>(section: &Section, lines: &[S]) -> Self {
        let status = match try_parse_version(&section.caption) {
            Some(version) => ReleaseStatus::Released(version),
            None => ReleaseStatus::Draft,
        };

        ReleaseNotes {
            status,
            caption: section.caption.clone(),
            lines: section
                .body(lines)
                .iter()
                .map(|line| line.as_ref().to_string())
                .collect(),
            start_index: section.start_index,
            end_index: section.end_index,
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self.status, ReleaseStatus::Draft)
    }

    /// The released version, `None` for the draft
    pub fn version(&self) -> Option<&Version> {
        match &self.status {
            ReleaseStatus::Released(version) => Some(version),
            ReleaseStatus::Draft => None,
        }
    }
}

/// Reads release notes for every section of a line buffer, in document order.
///
/// # Returns
/// * `Ok(Vec<ReleaseNotes>)` - One entry per scanned section
/// * `Err(EmptyChangelog)` - If the buffer has no release head
pub fn read_release_notes_from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<ReleaseNotes>> {
    let notes: Vec<ReleaseNotes> = scan(lines)
        .map(|section| ReleaseNotes::from_section(&section, lines))
        .collect();

    if notes.is_empty() {
        return Err(ChangelogError::EmptyChangelog);
    }

    Ok(notes)
}

/// A parsed changelog: the optional draft plus released sections in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Changelog {
    pub path: PathBuf,
    pub unreleased: Option<ReleaseNotes>,
    pub release_notes: Vec<ReleaseNotes>,
}

impl Changelog {
    /// Partition release notes into draft and released sections.
    ///
    /// # Errors
    /// * `MultipleDraftSections` - More than one section is a draft
    /// * `NoReleasedVersion` - Neither a draft nor a released section exists
    pub fn new(path: impl Into<PathBuf>, notes: Vec<ReleaseNotes>) -> Result<Self> {
        let (mut drafts, release_notes): (Vec<ReleaseNotes>, Vec<ReleaseNotes>) =
            notes.into_iter().partition(ReleaseNotes::is_draft);

        if drafts.len() > 1 {
            return Err(ChangelogError::MultipleDraftSections(
                drafts.into_iter().map(|notes| notes.caption).collect(),
            ));
        }

        let unreleased = drafts.pop();
        if unreleased.is_none() && release_notes.is_empty() {
            return Err(ChangelogError::NoReleasedVersion);
        }

        Ok(Changelog {
            path: path.into(),
            unreleased,
            release_notes,
        })
    }

    /// Build a changelog from the content of the file at `path`.
    pub fn from_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<Self> {
        Changelog::new(path, read_release_notes_from_lines(lines)?)
    }

    /// Released versions in document order
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.release_notes.iter().filter_map(ReleaseNotes::version)
    }

    /// The greatest released version
    pub fn latest_version(&self) -> Option<&Version> {
        self.versions().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_read_release_notes() {
        let content = lines(
            "# Changelog\n\n## Unreleased\n### Added\n- thing\n\n## [1.0.0] / 2020-01-01\n- first",
        );
        let notes = read_release_notes_from_lines(&content).unwrap();

        assert_eq!(notes.len(), 2);
        assert!(notes[0].is_draft());
        assert_eq!(notes[0].caption, "Unreleased");
        assert_eq!(notes[0].lines, vec!["### Added", "- thing"]);
        assert_eq!(notes[1].version(), Some(&Version::new(1, 0, 0)));
        assert_eq!(notes[1].lines, vec!["- first"]);
    }

    #[test]
    fn test_read_release_notes_empty() {
        let content = lines("# Changelog\n\nNothing here");
        assert!(matches!(
            read_release_notes_from_lines(&content),
            Err(ChangelogError::EmptyChangelog)
        ));
    }

    #[test]
    fn test_changelog_partitions_draft() {
        let content = lines("## Unreleased\n- next\n## 1.1.0\n- b\n## 1.0.0\n- a");
        let changelog = Changelog::from_lines(Path::new("CHANGELOG.md"), &content).unwrap();

        let unreleased = changelog.unreleased.as_ref().unwrap();
        assert_eq!(unreleased.caption, "Unreleased");
        assert_eq!(changelog.release_notes.len(), 2);
        assert!(changelog.release_notes.iter().all(|notes| !notes.is_draft()));
        assert_eq!(changelog.latest_version(), Some(&Version::new(1, 1, 0)));
    }

    #[test]
    fn test_changelog_without_draft() {
        let content = lines("## 1.0.0\n- a");
        let changelog = Changelog::from_lines(Path::new("CHANGELOG.md"), &content).unwrap();

        assert!(changelog.unreleased.is_none());
        assert_eq!(changelog.release_notes.len(), 1);
    }

    #[test]
    fn test_changelog_multiple_drafts() {
        let content = lines("## Unreleased\n- a\n## Next\n- b\n## 1.0.0\n- c");
        let err = Changelog::from_lines(Path::new("CHANGELOG.md"), &content).unwrap_err();

        match err {
            ChangelogError::MultipleDraftSections(captions) => {
                assert_eq!(captions, vec!["Unreleased", "Next"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_changelog_no_released_version() {
        assert!(matches!(
            Changelog::new("CHANGELOG.md", Vec::new()),
            Err(ChangelogError::NoReleasedVersion)
        ));
    }

    #[test]
    fn test_empty_draft_body() {
        let content = lines("## Unreleased\n\n## 1.0.0\n- a");
        let changelog = Changelog::from_lines(Path::new("CHANGELOG.md"), &content).unwrap();

        let unreleased = changelog.unreleased.unwrap();
        assert!(unreleased.lines.is_empty());
        assert_eq!(unreleased.start_index, unreleased.end_index);
    }
}
