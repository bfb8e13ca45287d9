//! Case-insensitive catalog search.
//!
//! A record matches when `"{name} {id}"`, lower-cased, contains the
//! trimmed and lower-cased query. An empty query matches everything.
//! Results keep input order; there is no ranking.

use chainhub_model::ProductRecord;

/// A normalized search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

pub fn matches(record: &ProductRecord, query: &SearchQuery) -> bool {
    query.is_empty() || record.search_text().contains(query.as_str())
}

/// Filter `records` by a raw query string.
pub fn filter<'a>(records: &'a [ProductRecord], query: &str) -> Vec<&'a ProductRecord> {
    filter_with(records, &SearchQuery::new(query))
}

pub fn filter_with<'a>(records: &'a [ProductRecord], query: &SearchQuery) -> Vec<&'a ProductRecord> {
    records
        .iter()
        .filter(|record| matches(record, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed_and_lowercased() {
        assert_eq!(SearchQuery::new("  SS-CRB ").as_str(), "ss-crb");
        assert!(SearchQuery::new(" \t\n").is_empty());
    }

    #[test]
    fn empty_dataset_yields_empty_result() {
        assert!(filter(&[], "rope").is_empty());
        assert!(filter(&[], "").is_empty());
    }
}
