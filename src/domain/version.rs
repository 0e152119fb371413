use crate::error::{ChangelogError, Result};
use semver::Version;

/// Parse a version from a caption or tag (e.g., "v1.2.3" -> 1.2.3)
///
/// A single leading `v` or `V` is accepted; the rest must be a full semantic version.
pub fn parse_version(input: &str) -> Result<Version> {
    let clean = input
        .strip_prefix('v')
        .or_else(|| input.strip_prefix('V'))
        .unwrap_or(input);

    Version::parse(clean).map_err(|source| ChangelogError::Version {
        input: input.to_string(),
        source,
    })
}

/// Parse a version, treating failure as "not a version"
pub fn try_parse_version(input: &str) -> Option<Version> {
    parse_version(input).ok()
}
