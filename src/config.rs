use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpVersionError, Result};
use crate::locator::{ANDROID_BUILD_GRADLE, IOS_PROJECT_DIR};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "bumpversion.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".bumpversion.toml";

/// Represents the complete configuration for bump-version.
///
/// Contains file locations, iOS pattern options and display behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub ios: IosConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_android_build_gradle() -> String {
    ANDROID_BUILD_GRADLE.to_string()
}

fn default_ios_dir() -> String {
    IOS_PROJECT_DIR.to_string()
}

fn default_true() -> bool {
    true
}

/// Where the build files live.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_android_build_gradle")]
    pub android_build_gradle: String,

    #[serde(default = "default_ios_dir")]
    pub ios_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            root: default_root(),
            android_build_gradle: default_android_build_gradle(),
            ios_dir: default_ios_dir(),
        }
    }
}

/// iOS pattern options.
///
/// `strict_marketing_read` makes the read side accept only x.y.z marketing
/// versions, the same shape the write side can replace.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct IosConfig {
    #[serde(default)]
    pub strict_marketing_read: bool,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    #[serde(default = "default_true")]
    pub show_banner: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            clear_screen: true,
            show_banner: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumpversion.toml` in current directory
/// 3. `.bumpversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path).map_err(|e| BumpVersionError::io(&path, e))?;
    parse_config(&config_str).map_err(|e| match e {
        BumpVersionError::Config(msg) => {
            BumpVersionError::config(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Parses configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| BumpVersionError::config(e.to_string()))
}
