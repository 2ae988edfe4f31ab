use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundlegenError {
    #[error("Unknown category: '{name}'")]
    UnknownCategory { name: String },

    #[error("Category {category} listed more than once in {path}")]
    DuplicateCategory { category: String, path: PathBuf },

    #[error("Invalid bundle metadata in {path}: {message}")]
    MetadataParse { path: PathBuf, message: String },

    #[error("Bundle id '{id}' is declared by both {first} and {second}")]
    DuplicateBundle {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Bundle not found: {id}")]
    BundleNotFound { id: String },

    #[error("Bundle root does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize config: {message}")]
    ConfigSerialize { message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BundlegenError>;

impl BundlegenError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCategory { .. } => 2,
            Self::BundleNotFound { .. } => 3,
            Self::RootNotFound { .. } => 4,
            Self::MetadataParse { .. }
            | Self::DuplicateCategory { .. }
            | Self::DuplicateBundle { .. } => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_message_quotes_input() {
        let err = BundlegenError::UnknownCategory {
            name: "databases".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown category: 'databases'");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn config_serialize_is_distinct_from_parse() {
        let err = BundlegenError::ConfigSerialize {
            message: "unsupported type".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to serialize config: unsupported type");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_errors_use_generic_exit_code() {
        let err: BundlegenError = std::io::Error::other("boom").into();
        assert_eq!(err.exit_code(), 1);
    }
}
