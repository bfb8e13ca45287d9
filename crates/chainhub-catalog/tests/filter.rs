//! Catalog search behaviour against the builtin table.

use chainhub_catalog::{Catalog, SearchQuery, filter, matches};
use chainhub_model::ProductRecord;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn ids(records: &[&ProductRecord]) -> Vec<String> {
    records.iter().map(|record| record.id.to_string()).collect()
}

#[test]
fn cuban_matches_single_record() {
    let catalog = Catalog::builtin();
    let result = filter(catalog.records(), "cuban");
    assert_eq!(ids(&result), vec!["SS-CUB-SLV-11"]);
}

#[test]
fn shared_sku_prefix_matches_everything() {
    let catalog = Catalog::builtin();
    let result = filter(catalog.records(), "ss-");
    assert_eq!(result.len(), 8);
}

#[test]
fn unknown_term_matches_nothing() {
    let catalog = Catalog::builtin();
    assert!(filter(catalog.records(), "nonexistent").is_empty());
}

#[test]
fn query_is_case_insensitive_and_trimmed() {
    let catalog = Catalog::builtin();
    let result = filter(catalog.records(), "  SS-CRB ");
    assert_eq!(ids(&result), vec!["SS-CRB-GLD-77"]);
    let result = filter(catalog.records(), "ROPE");
    assert_eq!(ids(&result), vec!["SS-ROP-GLD-28"]);
}

#[test]
fn query_spans_name_and_id_boundary() {
    // The search text joins name and id with one space.
    let catalog = Catalog::builtin();
    let result = filter(catalog.records(), "bold ss-crb");
    assert_eq!(ids(&result), vec!["SS-CRB-GLD-77"]);
}

#[test]
fn tags_are_not_searched() {
    let catalog = Catalog::builtin();
    assert!(filter(catalog.records(), "best seller").is_empty());
}

#[test]
fn matching_preserves_catalog_order() {
    let catalog = Catalog::builtin();
    let result = filter(catalog.records(), "gld");
    assert_eq!(
        ids(&result),
        vec!["SS-ROP-GLD-28", "SS-FIG-GLD-08", "SS-FRN-GLD-55", "SS-CRB-GLD-77"]
    );
}

#[test]
fn bullet_separator_is_searchable() {
    let catalog = Catalog::builtin();
    let query = SearchQuery::new("chain • smooth");
    let matched: Vec<&str> = catalog
        .records()
        .iter()
        .filter(|record| matches(record, &query))
        .map(|record| record.id.as_str())
        .collect();
    assert_eq!(matched, vec!["SS-SNK-SLV-31"]);
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn blank_query_is_identity(query in "[ \t\n]{0,4}") {
        let catalog = Catalog::builtin();
        let result = filter(catalog.records(), &query);
        let expected: Vec<&ProductRecord> = catalog.records().iter().collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn result_partitions_the_catalog(query in "[a-zA-Z0-9 •-]{0,8}") {
        let catalog = Catalog::builtin();
        let needle = query.trim().to_lowercase();
        let result = filter(catalog.records(), &query);
        for record in catalog.records() {
            let haystack = format!("{} {}", record.name, record.id).to_lowercase();
            let included = result.iter().any(|kept| kept.id == record.id);
            prop_assert_eq!(included, haystack.contains(&needle));
        }
    }

    #[test]
    fn filter_is_idempotent(query in "[a-zA-Z-]{0,5}") {
        let catalog = Catalog::builtin();
        let once: Vec<ProductRecord> = filter(catalog.records(), &query)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, &query);
        prop_assert_eq!(twice.len(), once.len());
        for (left, right) in twice.iter().zip(once.iter()) {
            prop_assert_eq!(&left.id, &right.id);
        }
    }

    #[test]
    fn substrings_of_ids_always_match(index in 0usize..8, start in 0usize..13, len in 1usize..13) {
        let catalog = Catalog::builtin();
        let record = &catalog.records()[index];
        let id = record.id.as_str();
        let start = start.min(id.len() - 1);
        let end = (start + len).min(id.len());
        let result = filter(catalog.records(), &id[start..end]);
        prop_assert!(result.iter().any(|kept| kept.id == record.id));
    }
}
