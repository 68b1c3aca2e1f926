//! CLI configuration, persisted as TOML in the user's config directory.
//!
//! Every field has a default, and a missing or unreadable config file
//! yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use vmc_page::{ControlStyle, Machine};
use vmc_persistence::DEFAULT_STORAGE_KEY;

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "vintage-machines";
const APP_NAME: &str = "vmc";
const CONFIG_FILENAME: &str = "config.toml";
const STORAGE_FILENAME: &str = "storage.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub detail: DetailConfig,
}

/// Where statuses are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage file; the platform data directory when unset.
    pub path: Option<PathBuf>,
    /// Key holding the status mapping inside the storage file.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// The machine catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML file with `[[machine]]` tables (`slug`, `name`).
    pub path: Option<PathBuf>,
}

/// Detail page presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    pub controls: ControlsSetting,
}

/// Which detail controls pages carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlsSetting {
    #[default]
    Toggles,
    Legacy,
}

impl From<ControlsSetting> for ControlStyle {
    fn from(setting: ControlsSetting) -> Self {
        match setting {
            ControlsSetting::Toggles => ControlStyle::Toggles,
            ControlsSetting::Legacy => ControlStyle::Legacy,
        }
    }
}

impl Config {
    /// Load from `explicit`, or from the default path when `None`.
    pub fn load(explicit: Option<&Path>) -> Self {
        match explicit.map(Path::to_path_buf).or_else(config_path) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("Could not determine config path, using defaults");
                Self::default()
            }
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Storage file to use.
    pub fn storage_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(|| {
            ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
                .map(|dirs| dirs.data_dir().join(STORAGE_FILENAME))
                .unwrap_or_else(|| PathBuf::from(STORAGE_FILENAME))
        })
    }
}

/// Default config file location.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    machine: Vec<Machine>,
}

/// Read a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<Machine>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read catalog {}", path.display()))?;
    let catalog: CatalogFile =
        toml::from_str(&content).with_context(|| format!("parse catalog {}", path.display()))?;
    Ok(catalog.machine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[detail]\ncontrols = \"legacy\"\n").unwrap();
        assert_eq!(config.detail.controls, ControlsSetting::Legacy);
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "storage = [").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
        assert_eq!(Config::load_from(&dir.path().join("absent.toml")), Config::default());
    }

    #[test]
    fn explicit_storage_path_wins() {
        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("/tmp/statuses.json"));
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/statuses.json"));
    }

    #[test]
    fn default_config_round_trips() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn reads_catalog_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "[[machine]]\nslug = \"apple-iie\"\nname = \"Apple IIe\"\n\n\
             [[machine]]\nslug = \"kim-1\"\nname = \"MOS KIM-1\"\n",
        )
        .unwrap();
        let machines = load_catalog(&path).unwrap();
        assert_eq!(machines.len(), 2);
        assert_eq!(machines[1], Machine::new("kim-1", "MOS KIM-1"));
    }
}
