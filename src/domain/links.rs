//! Markdown reference links comparing consecutive releases.

use crate::domain::section::Section;

/// Link to the changes between two refs
pub fn compare_url(url_base: &str, from: &str, to: &str) -> String {
    format!("{}/compare/{}...{}", url_base, from, to)
}

/// Link to the repository tree at a ref
pub fn tree_url(url_base: &str, reference: &str) -> String {
    format!("{}/tree/{}", url_base, reference)
}

/// Builds one reference definition per section, newest first.
///
/// The newest section compares its successor against `HEAD`, every middle
/// section compares the next older section against itself, and the oldest
/// section points at the tree of its tag.
///
/// # Example
/// ```
/// use changelog_publish::domain::links::reference_links;
/// use changelog_publish::domain::section::Section;
///
/// let section = |caption: &str, start| Section {
///     caption: caption.to_string(),
///     start_index: start,
///     end_index: start,
/// };
/// let links = reference_links(
///     &[section("Unreleased", 0), section("1.1.0", 1), section("1.0.0", 2)],
///     "https://github.com/owner/repo",
/// );
/// assert_eq!(links[0], "[Unreleased]: https://github.com/owner/repo/compare/1.1.0...HEAD");
/// assert_eq!(links[1], "[1.1.0]: https://github.com/owner/repo/compare/1.0.0...1.1.0");
/// assert_eq!(links[2], "[1.0.0]: https://github.com/owner/repo/tree/1.0.0");
/// ```
pub fn reference_links(sections: &[Section], url_base: &str) -> Vec<String> {
    let Some((oldest, newer)) = sections.split_last() else {
        return Vec::new();
    };

    let mut links: Vec<String> = newer
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let older = &sections[index + 1].caption;
            let target = if index == 0 {
                compare_url(url_base, older, "HEAD")
            } else {
                compare_url(url_base, older, &section.caption)
            };
            format!("[{}]: {}", section.caption, target)
        })
        .collect();

    links.push(format!(
        "[{}]: {}",
        oldest.caption,
        tree_url(url_base, &oldest.caption)
    ));
    links
}
