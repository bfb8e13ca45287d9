use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chainhub_catalog::{Catalog, CatalogError, CatalogReport, CatalogSource, load_catalog};
use chainhub_catalog::{load_default_catalog, resolve_catalog_path, resolve_catalog_path_from};

fn repo_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "chainhub-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

const CSV_HEADER: &str =
    "id,name,style,metal,finish,thickness_mm,length_inches,weight_grams,tags\n";

#[test]
fn shipped_toml_matches_builtin_table() {
    let loaded = load_catalog(&repo_data("catalog.toml")).expect("load catalog.toml");
    assert_eq!(loaded.records(), Catalog::builtin().records());
    assert!(matches!(loaded.source(), CatalogSource::File(_)));
}

#[test]
fn shipped_csv_matches_builtin_table() {
    let loaded = load_catalog(&repo_data("catalog.csv")).expect("load catalog.csv");
    assert_eq!(loaded.records(), Catalog::builtin().records());
}

#[test]
fn explicit_path_wins_resolution() {
    let path = repo_data("catalog.toml");
    assert_eq!(resolve_catalog_path(Some(&path)), Some(path.clone()));
    let catalog = load_default_catalog(Some(&path)).expect("load explicit catalog");
    assert_eq!(catalog.len(), 8);
}

#[test]
fn env_value_names_catalog_when_no_flag() {
    let env = OsString::from("/srv/chainhub/catalog.csv");
    assert_eq!(
        resolve_catalog_path_from(None, Some(env)),
        Some(PathBuf::from("/srv/chainhub/catalog.csv"))
    );
}

#[test]
fn flag_beats_env_value() {
    let flag = repo_data("catalog.toml");
    let env = OsString::from("/srv/chainhub/catalog.csv");
    assert_eq!(
        resolve_catalog_path_from(Some(&flag), Some(env)),
        Some(flag.clone())
    );
}

#[test]
fn empty_or_missing_env_value_means_builtin() {
    assert_eq!(resolve_catalog_path_from(None, Some(OsString::new())), None);
    assert_eq!(resolve_catalog_path_from(None, None), None);
}

#[test]
fn fingerprint_is_sha256_of_file_bytes() {
    let dir = unique_temp_dir("fingerprint");
    let path = dir.join("one.csv");
    write(
        &path,
        &format!("{CSV_HEADER}SS-TST-GLD-01,Test Chain,Rope,Gold,Matte,2.0,20,10,A|B|C\n"),
    );
    let catalog = load_catalog(&path).expect("load csv");
    assert_eq!(catalog.fingerprint().len(), 64);
    assert!(catalog.fingerprint().chars().all(|c| c.is_ascii_hexdigit()));
    let record = &catalog.records()[0];
    assert_eq!(record.tags, vec!["A", "B", "C"]);
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn csv_with_unknown_metal_is_rejected() {
    let dir = unique_temp_dir("bad-metal");
    let path = dir.join("bad.csv");
    write(
        &path,
        &format!("{CSV_HEADER}SS-TST-PLT-01,Test Chain,Rope,Platinum,Matte,2.0,20,10,\n"),
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidRecord { ref id, .. } if id == "SS-TST-PLT-01"),
        "unexpected error: {err}"
    );
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn toml_with_zero_weight_is_rejected() {
    let dir = unique_temp_dir("zero-weight");
    let path = dir.join("bad.toml");
    write(
        &path,
        r#"
[[product]]
id = "SS-TST-GLD-02"
name = "Test Chain"
style = "Box"
metal = "Gold"
finish = "Polished"
thickness_mm = 1.0
length_inches = 18
weight_grams = 0
"#,
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRecord { .. }), "{err}");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn malformed_toml_reports_path() {
    let dir = unique_temp_dir("malformed");
    let path = dir.join("broken.toml");
    write(&path, "[[product]\nid = ");
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Toml { .. }));
    assert!(err.to_string().contains("broken.toml"));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn empty_catalog_is_rejected() {
    let dir = unique_temp_dir("empty");
    let path = dir.join("empty.csv");
    write(&path, CSV_HEADER);
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Empty { .. }));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = unique_temp_dir("ext");
    let path = dir.join("catalog.json");
    write(&path, "[]");
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_catalog(Path::new("/nonexistent/chainhub/catalog.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn doctor_reports_duplicate_ids() {
    let dir = unique_temp_dir("duplicates");
    let path = dir.join("dupes.csv");
    write(
        &path,
        &format!(
            "{CSV_HEADER}\
             SS-DUP-GLD-01,First,Rope,Gold,Polished,2.0,20,10,\n\
             ss-dup-gld-01,Second,Curb,Silver,Matte,2.0,20,10,\n\
             SS-UNQ-GLD-02,Third,Box,Gold,Polished,2.0,20,10,\n"
        ),
    );
    let catalog = load_catalog(&path).expect("duplicates still load");
    let report = CatalogReport::from_catalog(&catalog);
    assert_eq!(report.counts.records, 3);
    assert_eq!(report.duplicate_ids, vec!["ss-dup-gld-01"]);
    assert!(report.has_problems());
    assert_eq!(report.counts.metals.get("Gold"), Some(&2));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn doctor_reports_builtin_counts() {
    let report = CatalogReport::from_catalog(&Catalog::builtin());
    assert_eq!(report.source, "builtin");
    assert_eq!(report.counts.records, 8);
    assert_eq!(report.counts.metals.get("Gold"), Some(&4));
    assert_eq!(report.counts.metals.get("Silver"), Some(&3));
    assert_eq!(report.counts.metals.get("Rose Gold"), Some(&1));
    assert_eq!(report.counts.finishes.get("Diamond Cut"), Some(&2));
    assert!(!report.has_problems());
}
