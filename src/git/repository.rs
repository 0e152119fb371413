use crate::error::{ChangelogError, Result};
use crate::git::RemoteUrl;
use git2::Repository as Git2Repo;
use std::path::Path;
use tracing::debug;

/// Repository facts read from a git remote with `git2`
pub struct Git2Repository {
    url_base: String,
    hosted: bool,
}

impl Git2Repository {
    /// Open or discover a git repository and read the URL of `remote`
    ///
    /// # Arguments
    /// * `path` - Directory inside the repository
    /// * `remote` - Remote name (e.g., "origin")
    /// * `hosts` - Hosts recognised as hosted platforms (e.g., "github.com")
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - Repository facts; not hosted if the URL has no known host
    /// * `Err` - If no repository is found or the remote doesn't exist
    pub fn open<P: AsRef<Path>>(path: P, remote: &str, hosts: &[String]) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        let remote = repo.find_remote(remote)?;
        let url = remote.url().ok_or_else(|| {
            ChangelogError::config(format!(
                "Remote '{}' has no UTF-8 URL",
                remote.name().unwrap_or_default()
            ))
        })?;

        Ok(Self::from_url(url, hosts))
    }

    /// Build from a remote URL
    pub fn from_url(url: &str, hosts: &[String]) -> Self {
        let repository = match RemoteUrl::parse(url) {
            Some(remote) => Git2Repository {
                hosted: remote.is_hosted_on(hosts),
                url_base: remote.base_url(),
            },
            None => Git2Repository {
                url_base: url.trim_end_matches('/').to_string(),
                hosted: false,
            },
        };
        debug!(url, base = %repository.url_base, hosted = repository.hosted, "resolved remote");
        repository
    }
}

impl super::Repository for Git2Repository {
    fn is_hosted(&self) -> bool {
        self.hosted
    }

    fn url_base(&self) -> &str {
        &self.url_base
    }
}
