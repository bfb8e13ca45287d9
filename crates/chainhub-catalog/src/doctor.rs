#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::catalog::Catalog;

#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogReport {
    pub schema: String,
    pub schema_version: u32,
    pub source: String,
    pub sha256: String,
    pub counts: CatalogCounts,
    /// Ids that appear more than once, in first-seen order.
    pub duplicate_ids: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CatalogCounts {
    pub records: usize,
    pub styles: BTreeMap<String, usize>,
    pub metals: BTreeMap<String, usize>,
    pub finishes: BTreeMap<String, usize>,
}

impl CatalogReport {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut styles = BTreeMap::new();
        let mut metals = BTreeMap::new();
        let mut finishes = BTreeMap::new();
        let mut seen: BTreeMap<String, usize> = BTreeMap::new();
        let mut duplicate_ids = Vec::new();
        for record in catalog.records() {
            *styles.entry(record.style.to_string()).or_insert(0) += 1;
            *metals.entry(record.metal.to_string()).or_insert(0) += 1;
            *finishes.entry(record.finish.to_string()).or_insert(0) += 1;
            let key = record.id.as_str().to_ascii_uppercase();
            let count = seen.entry(key).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicate_ids.push(record.id.to_string());
            }
        }
        Self {
            schema: "chainhub.catalog-doctor".to_string(),
            schema_version: 1,
            source: catalog.source().to_string(),
            sha256: catalog.fingerprint().to_string(),
            counts: CatalogCounts {
                records: catalog.len(),
                styles,
                metals,
                finishes,
            },
            duplicate_ids,
        }
    }

    pub fn has_problems(&self) -> bool {
        !self.duplicate_ids.is_empty()
    }
}
