//! Bundle categories
//!
//! A closed vocabulary used to tag and filter bundles. The canonical
//! name of each variant (e.g. `DATA_WAREHOUSES`) is what appears in
//! `metadata.json`, `config.toml` and on the command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BundlegenError;

/// Classification label attached to a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Category {
    Databases,
    DataWarehouses,
    WebServices,
    Custom,
    IdentityProviders,
    InternalDevelopment,
    Uploaded,
    Demo,
    Beta,
    ComingSoon,
    Legacy,
    DeveloperReady,
    ViaCitrixReady,
    DeveloperConnected,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 14] = [
        Category::Databases,
        Category::DataWarehouses,
        Category::WebServices,
        Category::Custom,
        Category::IdentityProviders,
        Category::InternalDevelopment,
        Category::Uploaded,
        Category::Demo,
        Category::Beta,
        Category::ComingSoon,
        Category::Legacy,
        Category::DeveloperReady,
        Category::ViaCitrixReady,
        Category::DeveloperConnected,
    ];

    /// Get all categories
    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    /// Canonical name, as stored in metadata and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Databases => "DATABASES",
            Self::DataWarehouses => "DATA_WAREHOUSES",
            Self::WebServices => "WEB_SERVICES",
            Self::Custom => "CUSTOM",
            Self::IdentityProviders => "IDENTITY_PROVIDERS",
            Self::InternalDevelopment => "INTERNAL_DEVELOPMENT",
            Self::Uploaded => "UPLOADED",
            Self::Demo => "DEMO",
            Self::Beta => "BETA",
            Self::ComingSoon => "COMING_SOON",
            Self::Legacy => "LEGACY",
            Self::DeveloperReady => "DEVELOPER_READY",
            Self::ViaCitrixReady => "VIA_CITRIX_READY",
            Self::DeveloperConnected => "DEVELOPER_CONNECTED",
        }
    }

    /// Get label for display. Never accepted by `from_str`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Databases => "Databases",
            Self::DataWarehouses => "Data Warehouses",
            Self::WebServices => "Web Services",
            Self::Custom => "Custom",
            Self::IdentityProviders => "Identity Providers",
            Self::InternalDevelopment => "Internal Development",
            Self::Uploaded => "Uploaded",
            Self::Demo => "Demo",
            Self::Beta => "Beta",
            Self::ComingSoon => "Coming Soon",
            Self::Legacy => "Legacy",
            Self::DeveloperReady => "Developer Ready",
            Self::ViaCitrixReady => "Via Citrix Ready",
            Self::DeveloperConnected => "Developer Connected",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BundlegenError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| BundlegenError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Category {
    type Error = BundlegenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
