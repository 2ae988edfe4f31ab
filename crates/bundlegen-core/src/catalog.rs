//! Bundle catalog
//!
//! Indexes every bundle under a root directory (any directory holding a
//! `metadata.json`) and answers category queries over them.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::category::Category;
use crate::error::{BundlegenError, Result};
use crate::metadata::{BundleMetadata, METADATA_FILE};

/// A bundle found on disk
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Bundle directory
    pub path: PathBuf,
    pub metadata: BundleMetadata,
}

impl Bundle {
    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn categories(&self) -> &[Category] {
        &self.metadata.categories
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    // sorted by id
    bundles: Vec<Bundle>,
}

impl Catalog {
    /// Scan `root` recursively for bundles
    pub fn load(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(BundlegenError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut bundles: Vec<Bundle> = Vec::new();
        let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() || entry.file_name() != METADATA_FILE {
                continue;
            }
            let Some(dir) = entry.path().parent() else {
                continue;
            };
            if let Some(metadata) = BundleMetadata::load(dir)? {
                bundles.push(Bundle {
                    path: dir.to_path_buf(),
                    metadata,
                });
            }
        }

        Self::from_bundles(root.to_path_buf(), bundles)
    }

    /// Build a catalog from already-loaded bundles
    pub fn from_bundles(root: PathBuf, mut bundles: Vec<Bundle>) -> Result<Self> {
        bundles.sort_by(|a, b| a.id().cmp(b.id()));
        for pair in bundles.windows(2) {
            if pair[0].id() == pair[1].id() {
                return Err(BundlegenError::DuplicateBundle {
                    id: pair[0].id().to_string(),
                    first: pair[0].path.clone(),
                    second: pair[1].path.clone(),
                });
            }
        }
        Ok(Self { root, bundles })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Bundle> {
        self.bundles
            .binary_search_by(|b| b.id().cmp(id))
            .ok()
            .map(|i| &self.bundles[i])
    }

    /// Like `get`, but a missing id is an error
    pub fn require(&self, id: &str) -> Result<&Bundle> {
        self.get(id).ok_or_else(|| BundlegenError::BundleNotFound {
            id: id.to_string(),
        })
    }

    pub fn with_category(&self, category: Category) -> Vec<&Bundle> {
        self.bundles
            .iter()
            .filter(|b| b.metadata.has_category(category))
            .collect()
    }

    /// Bundles grouped by category, in category declaration order.
    /// A bundle appears once under each of its categories.
    pub fn group_by_category(&self) -> BTreeMap<Category, Vec<&Bundle>> {
        let mut groups: BTreeMap<Category, Vec<&Bundle>> = BTreeMap::new();
        for bundle in &self.bundles {
            for category in bundle.categories() {
                groups.entry(*category).or_default().push(bundle);
            }
        }
        groups
    }

    /// Bundle count for every category, zeros included
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .map(|c| {
                let n = self
                    .bundles
                    .iter()
                    .filter(|b| b.metadata.has_category(*c))
                    .count();
                (*c, n)
            })
            .collect()
    }

    pub fn uncategorized(&self) -> Vec<&Bundle> {
        self.bundles
            .iter()
            .filter(|b| b.categories().is_empty())
            .collect()
    }

    /// Bundles matching `category` (all if `None`), split by `hidden`.
    ///
    /// Returns the visible bundles and how many matching bundles were hidden.
    pub fn visible(
        &self,
        category: Option<Category>,
        hidden: &[Category],
    ) -> (Vec<&Bundle>, usize) {
        let (visible, dropped): (Vec<&Bundle>, Vec<&Bundle>) = self
            .bundles
            .iter()
            .filter(|b| category.map_or(true, |c| b.metadata.has_category(c)))
            .partition(|b| !b.categories().iter().any(|c| hidden.contains(c)));
        (visible, dropped.len())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_bundle(root: &Path, rel: &str, id: &str, categories: &[&str]) {
        let dir = root.join(rel);
        fs::create_dir_all(&dir).unwrap();
        let json = serde_json::json!({
            "id": id,
            "title": id.to_uppercase(),
            "categories": categories,
        });
        fs::write(dir.join(METADATA_FILE), json.to_string()).unwrap();
    }

    fn sample_catalog() -> (TempDir, Catalog) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_bundle(
            root,
            "http/Citrix/Microsoft-Outlook",
            "outlook",
            &["WEB_SERVICES", "VIA_CITRIX_READY"],
        );
        write_bundle(root, "http/Acme/Warehouse", "acme-dw", &["DATA_WAREHOUSES"]);
        write_bundle(root, "http/Acme/Sandbox", "acme-demo", &["DEMO", "BETA"]);
        write_bundle(root, "sql/Plain", "plain", &[]);
        fs::write(root.join("README.md"), "not a bundle").unwrap();
        let catalog = Catalog::load(root).unwrap();
        (temp, catalog)
    }

    #[test]
    fn load_finds_nested_bundles_sorted_by_id() {
        let (_temp, catalog) = sample_catalog();
        let ids: Vec<_> = catalog.bundles().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec!["acme-demo", "acme-dw", "outlook", "plain"]);
        assert_eq!(catalog.len(), 4);
        assert!(catalog.get("outlook").unwrap().path.ends_with("Microsoft-Outlook"));
    }

    #[test]
    fn missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let err = Catalog::load(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, BundlegenError::RootNotFound { .. }));
    }

    #[test]
    fn empty_root_gives_empty_catalog() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::load(temp.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let temp = TempDir::new().unwrap();
        write_bundle(temp.path(), "a", "same", &[]);
        write_bundle(temp.path(), "b", "same", &[]);
        let err = Catalog::load(temp.path()).unwrap_err();
        assert!(matches!(err, BundlegenError::DuplicateBundle { ref id, .. } if id == "same"));
    }

    #[test]
    fn invalid_metadata_fails_load() {
        let temp = TempDir::new().unwrap();
        write_bundle(temp.path(), "bad", "bad", &["NOT_A_CATEGORY"]);
        let err = Catalog::load(temp.path()).unwrap_err();
        assert!(matches!(err, BundlegenError::MetadataParse { .. }));
    }

    #[test]
    fn require_missing_bundle() {
        let (_temp, catalog) = sample_catalog();
        assert!(catalog.require("outlook").is_ok());
        assert!(matches!(
            catalog.require("nope"),
            Err(BundlegenError::BundleNotFound { .. })
        ));
    }

    #[test]
    fn filter_by_category() {
        let (_temp, catalog) = sample_catalog();
        let web: Vec<_> = catalog
            .with_category(Category::WebServices)
            .iter()
            .map(|b| b.id())
            .collect();
        assert_eq!(web, vec!["outlook"]);
        assert!(catalog.with_category(Category::Legacy).is_empty());
    }

    #[test]
    fn groups_follow_declaration_order() {
        let (_temp, catalog) = sample_catalog();
        let groups = catalog.group_by_category();
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                Category::DataWarehouses,
                Category::WebServices,
                Category::Demo,
                Category::Beta,
                Category::ViaCitrixReady,
            ]
        );
        assert_eq!(groups[&Category::Demo][0].id(), "acme-demo");
    }

    #[test]
    fn counts_cover_every_category() {
        let (_temp, catalog) = sample_catalog();
        let counts = catalog.counts();
        assert_eq!(counts.len(), 14);
        assert_eq!(counts[0], (Category::Databases, 0));
        assert_eq!(counts[1], (Category::DataWarehouses, 1));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 5);
    }

    #[test]
    fn visible_counts_only_hidden_matches() {
        let (_temp, catalog) = sample_catalog();

        let (web, hidden) = catalog.visible(Some(Category::WebServices), &[Category::Demo]);
        assert_eq!(web.iter().map(|b| b.id()).collect::<Vec<_>>(), vec!["outlook"]);
        assert_eq!(hidden, 0);

        let (demo, hidden) = catalog.visible(Some(Category::Demo), &[Category::Demo]);
        assert!(demo.is_empty());
        assert_eq!(hidden, 1);

        let (all, hidden) = catalog.visible(None, &[Category::Beta]);
        assert_eq!(all.len(), 3);
        assert_eq!(hidden, 1);

        let (unfiltered, hidden) = catalog.visible(Some(Category::Demo), &[]);
        assert_eq!(unfiltered.len(), 1);
        assert_eq!(hidden, 0);
    }

    #[cfg(unix)]
    #[test]
    fn walk_errors_fail_load() {
        let temp = TempDir::new().unwrap();
        write_bundle(temp.path(), "http/a", "a", &[]);
        std::os::unix::fs::symlink(temp.path(), temp.path().join("http/loop")).unwrap();
        let err = Catalog::load(temp.path()).unwrap_err();
        assert!(matches!(err, BundlegenError::Io(_)));
    }

    #[test]
    fn uncategorized_and_hidden() {
        let (_temp, catalog) = sample_catalog();
        let plain: Vec<_> = catalog.uncategorized().iter().map(|b| b.id()).collect();
        assert_eq!(plain, vec!["plain"]);

        let (visible, hidden) = catalog.visible(None, &[Category::Beta]);
        let ids: Vec<_> = visible.iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec!["acme-dw", "outlook", "plain"]);
        assert_eq!(hidden, 1);
        assert_eq!(catalog.visible(None, &[]).0.len(), 4);
    }
}
