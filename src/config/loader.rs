//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfwardenError};

use super::{to_strings, VerifyConfig};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILENAME: &str = ".confwarden.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory receiving pre-annotation backups
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,

    /// Manifest listing the files to annotate, one path per line
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Files annotated in addition to the manifest, when they exist
    #[serde(default = "default_supplementary_files")]
    pub supplementary_files: Vec<String>,

    /// Verification targets
    #[serde(default)]
    pub verify: VerifyConfig,
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("/tmp/config-backups")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("/tmp/config_files.txt")
}

fn default_supplementary_files() -> Vec<String> {
    to_strings(&[
        "./nginx/common.conf",
        "./nginx/dev.conf",
        "./nginx/microservices.conf",
        "./nginx/prod.conf",
        "./nginx/staging.conf",
        "./scripts/postgres.conf",
        "./scripts/redis.conf",
        "./cloud-init/cloud-init.yaml",
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup_dir: default_backup_dir(),
            manifest: default_manifest(),
            supplementary_files: default_supplementary_files(),
            verify: VerifyConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `explicit`, else from `.confwarden.toml` in the
    /// working directory, else return the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfwardenError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            debug!("No {} found, using defaults", CONFIG_FILENAME);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfwardenError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfwardenError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        debug!(path = %path.display(), "Loaded configuration");
        toml::from_str(&content).map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfwardenError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }
}
