use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{BundlegenError, Result};

const CONFIG_FILE: &str = "config.toml";

const DEFAULT_BUNDLE_ROOT: &str = "bundles";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# bundlegen configuration file
# Location: ~/.bundlegen/config.toml

[catalog]
# Directory scanned for bundles (each bundle holds a metadata.json)
# Relative paths resolve against the current directory
root = "bundles"

# Categories left out of `bundlegen list` unless --all is given
# Names must match exactly, e.g. hidden = ["DEMO", "LEGACY"]
hidden = []
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Catalog-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Bundle root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Categories hidden from listings
    #[serde(default)]
    pub hidden: Vec<Category>,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_BUNDLE_ROOT)
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            hidden: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from base directory; a missing file yields defaults
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = Self::path(base_dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| BundlegenError::ConfigParse {
            path,
            message: e.to_string(),
        })
    }

    /// Write the config as plain TOML (template comments are not preserved)
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| BundlegenError::ConfigSerialize {
                message: e.to_string(),
            })?;

        fs::create_dir_all(base_dir)?;
        fs::write(Self::path(base_dir), content)?;
        Ok(())
    }

    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Write the commented template unless a config file already exists
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = Self::path(base_dir);
        if path.exists() {
            return Ok(path);
        }

        fs::create_dir_all(base_dir)?;
        fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog.root" => Some(self.catalog.root.display().to_string()),
            "catalog.hidden" => Some(format_categories(&self.catalog.hidden)),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog.root" => {
                self.catalog.root = PathBuf::from(value.trim());
                Ok(())
            }
            "catalog.hidden" => {
                self.catalog.hidden = parse_string_list(value)
                    .iter()
                    .map(|name| name.parse())
                    .collect::<Result<Vec<Category>>>()?;
                Ok(())
            }
            _ => Err(BundlegenError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["catalog.root", "catalog.hidden"]
            .iter()
            .filter_map(|key| self.get(key).map(|v| (key.to_string(), v)))
            .collect()
    }
}

fn format_categories(categories: &[Category]) -> String {
    let names: Vec<_> = categories.iter().map(|c| c.as_str()).collect();
    format!("{:?}", names)
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();

    // JSON array format: ["a", "b"]
    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
