use crate::domain::DEFAULT_TAG_PREFIX;
use crate::error::{NearestVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "nearestversion.toml";

/// Represents the complete configuration for nearest-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub locator: LocatorConfig,
}

/// Returns the default tag prefix expression.
fn default_tag_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}

fn default_early_exit() -> bool {
    true
}

/// How tag names are read as versions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    /// Regular expression stripped from the start of tag names
    #[serde(default = "default_tag_prefix")]
    pub prefix: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prefix: default_tag_prefix(),
        }
    }
}

/// Configuration for the history walk.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LocatorConfig {
    #[serde(default = "default_early_exit")]
    pub early_exit: bool,

    /// Revision to measure from instead of HEAD
    #[serde(default)]
    pub head: Option<String>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        LocatorConfig {
            early_exit: default_early_exit(),
            head: None,
        }
    }
}

/// Parses configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| NearestVersionError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nearestversion.toml` in current directory
/// 3. `nearestversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match discover_config() {
            Some(path) => path,
            None => {
                log::debug!("No configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    log::debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|e| {
        NearestVersionError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&content)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
