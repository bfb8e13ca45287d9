#![deny(unsafe_code)]

//! Catalog file loading.
//!
//! Resolution order:
//! 1. an explicit path (the `--catalog` flag)
//! 2. the `CHAINHUB_CATALOG` environment variable
//! 3. the compiled-in table

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chainhub_model::{ChainStyle, Finish, Metal, ModelError, ProductRecord, Sku};
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogSource};
use crate::error::CatalogError;

/// Environment variable naming a catalog file to use instead of the builtin table.
pub const CATALOG_ENV_VAR: &str = "CHAINHUB_CATALOG";

/// Separator between tags in the CSV `tags` column.
pub const CSV_TAG_SEPARATOR: char = '|';

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(rename = "product", default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    style: String,
    metal: String,
    finish: String,
    thickness_mm: f64,
    length_inches: u32,
    weight_grams: u32,
    #[serde(default)]
    tags: String,
}

/// Catalog path from the flag, then `CHAINHUB_CATALOG`. `None` means the
/// builtin table.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_catalog_path_from(explicit, std::env::var_os(CATALOG_ENV_VAR))
}

/// Same as [`resolve_catalog_path`] with the environment value passed in.
/// An empty value counts as unset.
pub fn resolve_catalog_path_from(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load the catalog named by `explicit` or the environment, falling back to
/// the builtin table.
pub fn load_default_catalog(explicit: Option<&Path>) -> Result<Catalog, CatalogError> {
    match resolve_catalog_path(explicit) {
        Some(path) => load_catalog(&path),
        None => {
            debug!("using builtin catalog");
            Ok(Catalog::builtin())
        }
    }
}

/// Load a catalog file, choosing the parser by extension (`.toml` or `.csv`).
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    let records = match extension.as_deref() {
        Some("toml") => parse_toml_catalog(&bytes, path)?,
        Some("csv") => parse_csv_catalog(&bytes, path)?,
        _ => {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    let catalog = Catalog::from_parsed(CatalogSource::File(path.to_path_buf()), &bytes, records)?;
    info!(
        path = %path.display(),
        records = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn parse_toml_catalog(bytes: &[u8], path: &Path) -> Result<Vec<ProductRecord>, CatalogError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        CatalogError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })?;
    let parsed: TomlCatalog = toml::from_str(text).map_err(|source| CatalogError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parsed.products)
}

fn parse_csv_catalog(bytes: &[u8], path: &Path) -> Result<Vec<ProductRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| CatalogError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        records.push(record_from_csv_row(row, path)?);
    }
    Ok(records)
}

fn record_from_csv_row(row: CsvRow, path: &Path) -> Result<ProductRecord, CatalogError> {
    let invalid = |error: ModelError| CatalogError::InvalidRecord {
        source_label: path.display().to_string(),
        id: row.id.clone(),
        error,
    };
    let id = Sku::new(row.id.as_str()).map_err(invalid)?;
    let style: ChainStyle = row.style.parse().map_err(invalid)?;
    let metal: Metal = row.metal.parse().map_err(invalid)?;
    let finish: Finish = row.finish.parse().map_err(invalid)?;
    let tags = row
        .tags
        .split(CSV_TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    Ok(ProductRecord {
        id,
        name: row.name,
        style,
        metal,
        finish,
        thickness_mm: row.thickness_mm,
        length_inches: row.length_inches,
        weight_grams: row.weight_grams,
        tags,
    })
}
