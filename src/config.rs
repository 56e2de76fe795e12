use crate::error::{Result, VerbumpError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the repository and user config directory
pub const CONFIG_FILE_NAME: &str = "verbump.toml";

/// Represents the complete configuration for verbump.
///
/// Every section is optional; command-line flags take precedence over it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub commits: CommitsConfig,

    #[serde(default)]
    pub pre_release: PreReleaseConfig,
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_include() -> Vec<String> {
    vec![".".to_string()]
}

/// Where the current version lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    /// Version file, relative to the repository root
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Prefix stripped from the last tag when it is used as the current version
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            file: None,
            tag_prefix: default_tag_prefix(),
        }
    }
}

/// Which commits are analysed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommitsConfig {
    /// Subfolders whose commits count towards the bump
    #[serde(default = "default_include")]
    pub include: Vec<String>,
}

impl Default for CommitsConfig {
    fn default() -> Self {
        CommitsConfig {
            include: default_include(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PreReleaseConfig {
    #[serde(default)]
    pub label: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `verbump.toml` in the repository directory
/// 3. `verbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `repository` - Repository directory searched for `verbump.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, repository: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if repository.join(CONFIG_FILE_NAME).exists() {
        repository.join(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            path
        } else {
            tracing::debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");

    let config_str = fs::read_to_string(&path).map_err(|e| {
        VerbumpError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| VerbumpError::config(format!("Cannot parse '{}': {}", path.display(), e)))
}
