//! Bundle metadata parsing for metadata.json

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{BundlegenError, Result};

pub const METADATA_FILE: &str = "metadata.json";

/// Parsed metadata.json of a single bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleMetadata {
    /// Bundle id (unique within a catalog)
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Categories in the order the file lists them
    pub categories: Vec<Category>,
}

/// On-disk shape; categories stay strings until validated
#[derive(Debug, Deserialize)]
struct RawMetadata {
    id: String,
    title: String,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
}

impl BundleMetadata {
    /// Load metadata.json from a bundle directory
    ///
    /// Returns `Ok(None)` if the directory has no metadata file.
    pub fn load(bundle_dir: &Path) -> Result<Option<Self>> {
        let path = bundle_dir.join(METADATA_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content, &path).map(Some)
    }

    /// Parse metadata JSON; `path` is only used for error reporting
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawMetadata =
            serde_json::from_str(content).map_err(|e| BundlegenError::MetadataParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut categories = Vec::with_capacity(raw.categories.len());
        for name in &raw.categories {
            let category: Category = name.parse().map_err(|e: BundlegenError| {
                BundlegenError::MetadataParse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })?;
            if categories.contains(&category) {
                return Err(BundlegenError::DuplicateCategory {
                    category: category.to_string(),
                    path: path.to_path_buf(),
                });
            }
            categories.push(category);
        }

        Ok(Self {
            id: raw.id,
            title: raw.title,
            vendor: raw.vendor,
            version: raw.version,
            description: raw.description,
            categories,
        })
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// First listed category, if any
    pub fn primary_category(&self) -> Option<Category> {
        self.categories.first().copied()
    }
}
