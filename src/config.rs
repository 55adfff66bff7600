//! # Configuration
//!
//! Every location the pipeline touches is a field of [`Config`]. The
//! defaults reproduce the historical layout (see [`crate::defaults`]); an
//! optional `.omi-publish.yaml` overrides individual fields:
//!
//! ```yaml
//! schemas_url: https://github.com/example/openMINDS.git
//! upload_dir: ../gh-pages
//! remote: upstream
//! ```
//!
//! Relative paths are resolved against an explicit root by
//! [`Config::layout`]. Components only ever see the resolved [`Layout`], never
//! the process working directory.

use crate::defaults;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for sources, build output and the publish clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub schemas_url: String,
    pub instances_url: String,
    pub schemas_checkout: PathBuf,
    pub instances_checkout: PathBuf,
    pub schemas_subdir: PathBuf,
    pub instances_subdir: PathBuf,
    pub static_dir: PathBuf,
    pub target_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub remote: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schemas_url: defaults::SCHEMAS_URL.to_string(),
            instances_url: defaults::INSTANCES_URL.to_string(),
            schemas_checkout: PathBuf::from(defaults::SCHEMAS_CHECKOUT),
            instances_checkout: PathBuf::from(defaults::INSTANCES_CHECKOUT),
            schemas_subdir: PathBuf::from(defaults::SCHEMAS_SUBDIR),
            instances_subdir: PathBuf::from(defaults::INSTANCES_SUBDIR),
            static_dir: PathBuf::from(defaults::STATIC_DIR),
            target_dir: PathBuf::from(defaults::TARGET_DIR),
            upload_dir: PathBuf::from(defaults::UPLOAD_DIR),
            remote: defaults::REMOTE.to_string(),
        }
    }
}

/// Absolute locations derived from a [`Config`] and a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub schemas_url: String,
    pub instances_url: String,
    pub schemas_checkout: PathBuf,
    pub instances_checkout: PathBuf,
    /// `{schemas_checkout}/{schemas_subdir}`
    pub schemas_root: PathBuf,
    /// `{instances_checkout}/{instances_subdir}`
    pub instances_root: PathBuf,
    pub static_dir: PathBuf,
    pub target_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub remote: String,
}

impl Layout {
    /// Build output directory for `version`.
    pub fn target_for(&self, version: &str) -> PathBuf {
        self.target_dir.join(version)
    }
}

impl Config {
    /// Resolve every relative path against `root`.
    pub fn layout(&self, root: &Path) -> Layout {
        let schemas_checkout = root.join(&self.schemas_checkout);
        let instances_checkout = root.join(&self.instances_checkout);
        Layout {
            schemas_url: self.schemas_url.clone(),
            instances_url: self.instances_url.clone(),
            schemas_root: schemas_checkout.join(&self.schemas_subdir),
            instances_root: instances_checkout.join(&self.instances_subdir),
            schemas_checkout,
            instances_checkout,
            static_dir: root.join(&self.static_dir),
            target_dir: root.join(&self.target_dir),
            upload_dir: root.join(&self.upload_dir),
            remote: self.remote.clone(),
        }
    }
}

/// Parse a YAML configuration string.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let only_comments = yaml_content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    if only_comments {
        return Ok(Config::default());
    }
    serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = e.to_string();
        let hint = if message.contains("unknown field") {
            Some(
                "Valid keys are schemas_url, instances_url, schemas_checkout, \
                 instances_checkout, schemas_subdir, instances_subdir, static_dir, \
                 target_dir, upload_dir and remote"
                    .to_string(),
            )
        } else {
            None
        };
        Error::ConfigParse { message, hint }
    })
}

/// Read and parse a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Load `explicit` if given, else the default config file under `root` if
/// present, else the built-in defaults.
pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => from_file(path),
        None => {
            let path = root.join(defaults::CONFIG_FILE);
            if path.is_file() {
                from_file(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
