//! Release section scanning over a changelog line buffer.
//!
//! A section starts at a release head (`## ...`) and spans the release content
//! lines (`###` sub-headers and `-` list items) that directly follow it. The
//! first line that is neither content nor a head closes the section.

use tracing::debug;

const RELEASE_HEAD: &str = "## ";

/// A release section located in a line buffer.
///
/// `start_index` is the index of the release head. `end_index` is the index of
/// the last non-blank body line, inclusive. A section without body lines has
/// `start_index == end_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub caption: String,
    pub start_index: usize,
    pub end_index: usize,
}

impl Section {
    /// Number of body lines below the head
    pub fn body_len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Whether the section has no body lines
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Body lines of this section, head excluded
    pub fn body<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> &'a [S] {
        &lines[self.start_index + 1..=self.end_index]
    }
}

/// Returns true if the line opens a release section.
pub fn is_release_head(line: &str) -> bool {
    line.starts_with(RELEASE_HEAD)
}

/// Returns true if the line belongs to a release body.
pub fn is_release_content(line: &str) -> bool {
    line.starts_with("###") || line.trim().starts_with('-')
}

/// Extracts the caption from a release head.
///
/// # Example
/// ```
/// use changelog_publish::domain::section::caption;
///
/// assert_eq!(caption("## [1.0.0] / 2020-01-01"), "1.0.0");
/// assert_eq!(caption("## Unreleased"), "Unreleased");
/// ```
pub fn caption(head: &str) -> String {
    head.trim_start_matches(['#', ' ', '['])
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches(']')
        .to_string()
}

/// Lazily scans release sections in document order.
///
/// Single pass: the iterator only moves forward and cannot be restarted.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Sections<'_, S> {
    Sections { lines, cursor: 0 }
}

/// Iterator returned by [`scan`].
pub struct Sections<'a, S> {
    lines: &'a [S],
    cursor: usize,
}

impl<'a, S: AsRef<str>> Sections<'a, S> {
    fn line(&self, index: usize) -> &'a str {
        let lines: &'a [S] = self.lines;
        lines[index].as_ref()
    }

    fn find_from(&self, from: usize, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        (from..self.lines.len()).find(|&index| predicate(self.line(index)))
    }

    /// Walks back from `boundary - 1` to the last non-blank line; stops at the head.
    fn trim_back(&self, head: usize, boundary: usize) -> usize {
        (head..boundary)
            .rev()
            .find(|&index| {
                let line = self.line(index);
                is_release_head(line) || !line.trim().is_empty()
            })
            .unwrap_or(head)
    }
}

impl<S: AsRef<str>> Iterator for Sections<'_, S> {
    type Item = Section;

    fn next(&mut self) -> Option<Section> {
        let head = self.find_from(self.cursor, is_release_head)?;
        let boundary = self
            .find_from(head + 1, |line| {
                is_release_head(line) || !is_release_content(line)
            })
            .unwrap_or(self.lines.len());
        let end_index = self.trim_back(head, boundary);

        let section = Section {
            caption: caption(self.line(head)),
            start_index: head,
            end_index,
        };
        debug!(
            caption = %section.caption,
            start = section.start_index,
            end = section.end_index,
            "scanned release section"
        );

        self.cursor = end_index + 1;
        Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    const SCENARIO: &str = "## Unreleased
### Added
- thing

## [1.0.0] / 2020-01-01
### Added
- initial release";

    #[test]
    fn test_scan_scenario() {
        let content = lines(SCENARIO);
        let sections: Vec<Section> = scan(&content).collect();

        assert_eq!(
            sections,
            vec![
                Section {
                    caption: "Unreleased".to_string(),
                    start_index: 0,
                    end_index: 2,
                },
                Section {
                    caption: "1.0.0".to_string(),
                    start_index: 4,
                    end_index: 6,
                },
            ]
        );
    }

    #[test]
    fn test_scan_skips_preamble() {
        let content = lines("# Changelog\n\nAll notable changes.\n\n## 0.2.0\n- fix");
        let sections: Vec<Section> = scan(&content).collect();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].caption, "0.2.0");
        assert_eq!(sections[0].start_index, 4);
        assert_eq!(sections[0].end_index, 5);
    }

    #[test]
    fn test_scan_no_heads() {
        let content = lines("# Changelog\n\nNothing yet");
        assert_eq!(scan(&content).count(), 0);

        let empty: Vec<String> = Vec::new();
        assert_eq!(scan(&empty).count(), 0);
    }

    #[test]
    fn test_blank_body_is_empty_section() {
        let content = lines("## Unreleased\n\n\n## 1.0.0\n- first");
        let sections: Vec<Section> = scan(&content).collect();

        assert_eq!(sections[0].start_index, 0);
        assert_eq!(sections[0].end_index, 0);
        assert!(sections[0].is_empty());
        assert!(sections[0].body(&content).is_empty());
        assert_eq!(sections[1].start_index, 3);
        assert_eq!(sections[1].end_index, 4);
    }

    #[test]
    fn test_head_at_end_of_buffer() {
        let content = lines("## 1.0.0\n- first\n## Unreleased");
        let sections: Vec<Section> = scan(&content).collect();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].caption, "Unreleased");
        assert_eq!(sections[1].start_index, 2);
        assert!(sections[1].is_empty());
    }

    #[test]
    fn test_adjacent_heads() {
        let content = lines("## Unreleased\n## 1.0.0\n- first");
        let sections: Vec<Section> = scan(&content).collect();

        assert_eq!(sections.len(), 2);
        assert!(sections[0].is_empty());
        assert_eq!(sections[1].body(&content), &["- first".to_string()]);
    }

    #[test]
    fn test_prose_closes_section() {
        let content = lines(
            "## 1.1.0\n- change\nSome prose here\n### Fixed\n- hidden\n## 1.0.0\n- first",
        );
        let sections: Vec<Section> = scan(&content).collect();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].end_index, 1);
        assert_eq!(sections[1].caption, "1.0.0");
        assert_eq!(sections[1].start_index, 5);
    }

    #[test]
    fn test_trailing_link_block_is_not_content() {
        let content = lines(
            "## 1.0.0\n- first\n\n[1.0.0]: https://github.com/owner/repo/tree/1.0.0",
        );
        let sections: Vec<Section> = scan(&content).collect();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].end_index, 1);
    }

    #[test]
    fn test_indented_list_items_are_content() {
        let content = lines("## 1.0.0\n- parent\n  - child\n\t- tabbed");
        let section = scan(&content).next().unwrap();
        assert_eq!(section.body_len(), 3);
    }

    #[test]
    fn test_sections_do_not_overlap() {
        let content = lines(
            "## Unreleased\n- a\n\n## 2.0.0\n### Changed\n- b\n\n## 1.0.0\n- c\n\n",
        );
        let sections: Vec<Section> = scan(&content).collect();

        assert_eq!(sections.len(), 3);
        for pair in sections.windows(2) {
            assert!(pair[0].end_index < pair[1].start_index);
        }
    }

    #[test]
    fn test_caption_variants() {
        assert_eq!(caption("## [1.0.0] / 2020-01-01"), "1.0.0");
        assert_eq!(caption("## 1.0.0 - 2020-01-01"), "1.0.0");
        assert_eq!(caption("## [Unreleased]"), "Unreleased");
        assert_eq!(caption("##  vNext"), "vNext");
        assert_eq!(caption("## "), "");
    }

    #[test]
    fn test_line_classification() {
        assert!(is_release_head("## 1.0.0"));
        assert!(!is_release_head("### Added"));
        assert!(!is_release_head("##1.0.0"));

        assert!(is_release_content("### Added"));
        assert!(is_release_content("  - nested"));
        assert!(!is_release_content(""));
        assert!(!is_release_content("prose"));
    }
}
