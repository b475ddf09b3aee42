use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::DateLayout;
use crate::error::{CalverError, Result};

/// Name of the configuration file looked up in the working directory
/// and in the user configuration directory.
pub const CONFIG_FILE_NAME: &str = "calver.toml";

/// Represents the complete configuration for calver-ci.
///
/// One deployment uses one consistent layout across the default, feature and
/// release paths; the layout is therefore a single field here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_branch_name")]
    pub default_branch: String,

    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub feature_suffix: String,

    #[serde(default)]
    pub layout: DateLayout,

    #[serde(default)]
    pub feature_base: FeatureBase,

    #[serde(default)]
    pub default_scheme: DefaultScheme,

    #[serde(default)]
    pub pad_default: bool,
}

/// Returns the default trunk branch name.
fn default_branch_name() -> String {
    "main".to_string()
}

/// Policy for the base of a feature-branch version.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureBase {
    /// Current date, formatted like the default path
    #[default]
    Date,
    /// Greatest final tag in the snapshot
    LatestTag,
}

/// Scheme used for builds of the default branch.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultScheme {
    /// `<date>.<pipeline id>`
    #[default]
    Pipeline,
    /// `<date>.<merges today>-RC<n>`
    Candidate,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_branch: default_branch_name(),
            prefix: String::new(),
            feature_suffix: String::new(),
            layout: DateLayout::default(),
            feature_base: FeatureBase::default(),
            default_scheme: DefaultScheme::default(),
            pad_default: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `calver.toml` in current directory
/// 3. `calver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses a TOML document into a [`Config`].
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| CalverError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_branch, "main");
        assert!(config.prefix.is_empty());
        assert!(config.feature_suffix.is_empty());
        assert_eq!(config.layout, DateLayout::Compact);
        assert_eq!(config.feature_base, FeatureBase::Date);
        assert_eq!(config.default_scheme, DefaultScheme::Pipeline);
        assert!(!config.pad_default);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = parse_config(
            r#"
default_branch = "trunk"
prefix = "cli"
feature_suffix = "-SNAPSHOT"
layout = "dotted"
feature_base = "latest-tag"
default_scheme = "candidate"
pad_default = true
"#,
        )
        .unwrap();

        assert_eq!(config.default_branch, "trunk");
        assert_eq!(config.prefix, "cli");
        assert_eq!(config.feature_suffix, "-SNAPSHOT");
        assert_eq!(config.layout, DateLayout::Dotted);
        assert_eq!(config.feature_base, FeatureBase::LatestTag);
        assert_eq!(config.default_scheme, DefaultScheme::Candidate);
        assert!(config.pad_default);
    }

    #[test]
    fn test_unknown_layout_is_config_error() {
        let err = parse_config(r#"layout = "weekly""#).unwrap_err();
        assert!(matches!(err, CalverError::Config(_)));
    }
}
