#![deny(unsafe_code)]

use std::path::PathBuf;

use chainhub_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse CSV catalog {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("unsupported catalog format for {path} (expected .toml or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid record {id} in {source_label}: {error}")]
    InvalidRecord {
        source_label: String,
        id: String,
        #[source]
        error: ModelError,
    },

    #[error("catalog {source_label} contains no records")]
    Empty { source_label: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
