#![deny(unsafe_code)]

use std::fmt;
use std::path::PathBuf;

use chainhub_model::ProductRecord;
use sha2::Digest;

use crate::builtin::{BUILTIN_SOURCE, builtin_records};
use crate::error::CatalogError;

/// Where a catalog's records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => f.write_str(BUILTIN_SOURCE),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An immutable, ordered set of product records.
///
/// Records are never added or removed once a catalog is built.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: CatalogSource,
    fingerprint: String,
    records: Vec<ProductRecord>,
}

impl Catalog {
    /// The compiled-in eight-record catalog.
    pub fn builtin() -> Self {
        let records = builtin_records();
        // Hash the canonical JSON form so the builtin table has a stable
        // fingerprint comparable across releases.
        let canonical = serde_json::to_vec(&records).unwrap_or_default();
        Self {
            source: CatalogSource::Builtin,
            fingerprint: sha256_hex(&canonical),
            records,
        }
    }

    /// Build a catalog from parsed records, validating each one.
    pub(crate) fn from_parsed(
        source: CatalogSource,
        source_bytes: &[u8],
        records: Vec<ProductRecord>,
    ) -> Result<Self, CatalogError> {
        let source_label = source.to_string();
        if records.is_empty() {
            return Err(CatalogError::Empty { source_label });
        }
        for record in &records {
            record
                .validate()
                .map_err(|error| CatalogError::InvalidRecord {
                    source_label: source_label.clone(),
                    id: record.id.to_string(),
                    error,
                })?;
        }
        Ok(Self {
            source,
            fingerprint: sha256_hex(source_bytes),
            records,
        })
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Lowercase hex SHA-256 of the source bytes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose id matches `sku`, ignoring ASCII case.
    pub fn find(&self, sku: &str) -> Option<&ProductRecord> {
        self.records.iter().find(|record| record.id.matches(sku))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}
