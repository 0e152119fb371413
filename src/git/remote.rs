use regex::Regex;

const REMOTE_PATTERN: &str =
    r"^(?:[a-z+]+://)?(?:[^@/]+@)?(?P<host>[^/:]+)(?::\d+)?[:/](?P<path>.+?)(?:\.git)?/?$";

/// Host and repository path of a git remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub host: String,
    pub path: String,
}

impl RemoteUrl {
    /// Parse https, ssh and scp-style remote URLs
    ///
    /// Returns `None` for local paths and anything without a host.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.starts_with('/') || url.starts_with("file://") {
            return None;
        }

        let re = Regex::new(REMOTE_PATTERN).ok()?;
        let captures = re.captures(url)?;

        Some(RemoteUrl {
            host: captures["host"].to_lowercase(),
            path: captures["path"].to_string(),
        })
    }

    /// Browser URL of the repository (e.g., "https://github.com/owner/repo")
    pub fn base_url(&self) -> String {
        format!("https://{}/{}", self.host, self.path)
    }

    /// Whether the host is one of `hosts`, ignoring case
    pub fn is_hosted_on(&self, hosts: &[String]) -> bool {
        hosts.iter().any(|host| host.eq_ignore_ascii_case(&self.host))
    }
}
