use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

const CONFIG_FILE: &str = "changelogpublish.toml";

/// Represents the complete configuration for changelog-publish.
///
/// Contains the changelog location and the settings used to build compare links.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub links: LinksConfig,
}

fn default_changelog_path() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

/// Location of the changelog file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Returns the default list of hosts that serve compare and tree pages.
fn default_hosts() -> Vec<String> {
    vec!["github.com".to_string()]
}

/// Configuration for the reference links appended on finalize.
///
/// Links are only rebuilt when enabled and the remote's host is listed in `hosts`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LinksConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_hosts")]
    pub hosts: Vec<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        LinksConfig {
            enabled: default_enabled(),
            remote: default_remote(),
            hosts: default_hosts(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelogpublish.toml` in current directory
/// 3. `.changelogpublish.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Config)` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE).exists() {
        PathBuf::from(CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(format!(".{}", CONFIG_FILE));
        if path.exists() {
            path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ChangelogError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    toml::from_str(&config_str)
        .map_err(|e| ChangelogError::config(format!("Invalid '{}': {}", path.display(), e)))
}
