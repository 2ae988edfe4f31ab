pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod metadata;

pub use catalog::{Bundle, Catalog};
pub use category::Category;
pub use config::{CatalogConfig, Config};
pub use error::{BundlegenError, Result};
pub use metadata::{BundleMetadata, METADATA_FILE};
