use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Version;
use crate::error::{Result, SemverGenError};

/// File name searched for in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "semver.toml";

/// Represents the complete configuration for semver-gen.
///
/// Every section is optional. A missing section behaves like an empty one:
/// no keywords, no overrides, nothing blacklisted, no tag prefixes.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub wording: WordingConfig,

    #[serde(default)]
    pub force: ForceConfig,

    #[serde(default)]
    pub blacklist: Vec<String>,

    #[serde(default)]
    pub tag_prefixes: Vec<String>,
}

/// Keyword lists per wording category.
///
/// Matching is case-insensitive and the order of keywords is irrelevant.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct WordingConfig {
    #[serde(default)]
    pub patch: Vec<String>,

    #[serde(default)]
    pub minor: Vec<String>,

    #[serde(default)]
    pub major: Vec<String>,

    #[serde(default)]
    pub release: Vec<String>,
}

/// Caller-supplied overrides applied before version derivation.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ForceConfig {
    #[serde(default)]
    pub major: Option<u64>,

    #[serde(default)]
    pub minor: Option<u64>,

    #[serde(default)]
    pub patch: Option<u64>,

    /// Hash of the commit the analysis starts from
    #[serde(default)]
    pub commit: Option<String>,

    /// Resume from the most recent tagged commit
    #[serde(default)]
    pub existing: bool,

    /// Only keyword matches move the version
    #[serde(default)]
    pub strict: bool,
}

impl ForceConfig {
    /// Applies the forced components to `version`.
    ///
    /// A forced value of 0 counts as unset and leaves the component alone.
    pub fn apply(&self, mut version: Version) -> Version {
        if let Some(major) = self.major.filter(|v| *v > 0) {
            version.major = major;
        }
        if let Some(minor) = self.minor.filter(|v| *v > 0) {
            version.minor = minor;
        }
        if let Some(patch) = self.patch.filter(|v| *v > 0) {
            version.patch = patch;
        }
        version
    }

    /// The forced start commit, if a non-empty one is configured
    pub fn start_commit(&self) -> Option<&str> {
        self.commit.as_deref().filter(|hash| !hash.is_empty())
    }
}

impl Config {
    /// The version derivation starts from: zero with forced overrides applied.
    pub fn initial_version(&self) -> Version {
        self.force.apply(Version::default())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `semver.toml` in current directory
/// 3. `semver-gen/semver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// The file is TOML. YAML configurations (`semver.yaml`) use the same keys
/// and have to be converted, for example `wording:` with an indented
/// `patch: [fix]` becomes a `[wording]` table with `patch = ["fix"]`.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(SemverGenError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path
        }
        None => match find_config_file() {
            Some(path) => path,
            None => {
                tracing::debug!("No configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    load_config_file(&path)
}

/// Parses a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config> {
    tracing::debug!("Loading configuration from: {}", path.display());
    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("semver-gen").join(CONFIG_FILE_NAME);
    user.exists().then_some(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.wording.major.is_empty());
        assert!(config.wording.minor.is_empty());
        assert!(config.wording.patch.is_empty());
        assert!(config.wording.release.is_empty());
        assert!(config.blacklist.is_empty());
        assert!(config.tag_prefixes.is_empty());
        assert!(!config.force.strict);
        assert!(!config.force.existing);
        assert_eq!(config.initial_version(), Version::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
blacklist = ["skip-ci", "no-version"]
tag_prefixes = ["app-", "infra-"]

[wording]
patch = ["fix", "update"]
minor = ["feat", "change"]
major = ["breaking"]
release = ["release-candidate"]

[force]
major = 1
minor = 2
commit = "abc123"
existing = true
strict = true
"#,
        )
        .unwrap();

        assert_eq!(config.wording.patch, vec!["fix", "update"]);
        assert_eq!(config.wording.release, vec!["release-candidate"]);
        assert_eq!(config.blacklist, vec!["skip-ci", "no-version"]);
        assert_eq!(config.tag_prefixes, vec!["app-", "infra-"]);
        assert_eq!(config.force.start_commit(), Some("abc123"));
        assert!(config.force.existing);
        assert!(config.force.strict);
        assert_eq!(config.initial_version(), Version::new(1, 2, 0));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
[wording]
minor = ["feat"]
"#,
        )
        .unwrap();

        assert_eq!(config.wording.minor, vec!["feat"]);
        assert!(config.wording.patch.is_empty());
        assert_eq!(config.force, ForceConfig::default());
    }

    #[test]
    fn test_force_zero_is_unset() {
        let force = ForceConfig {
            major: Some(0),
            minor: Some(0),
            patch: Some(4),
            ..ForceConfig::default()
        };
        assert_eq!(force.apply(Version::new(3, 2, 1)), Version::new(3, 2, 4));
    }

    #[test]
    fn test_empty_start_commit_is_unset() {
        let force = ForceConfig {
            commit: Some(String::new()),
            ..ForceConfig::default()
        };
        assert_eq!(force.start_commit(), None);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let err = load_config(Some("/definitely/not/here/semver.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
