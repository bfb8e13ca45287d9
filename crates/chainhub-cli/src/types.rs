use chainhub_catalog::{PriceQuote, TierBand};
use chainhub_model::ProductRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Normalized query (trimmed, lower-cased).
    pub query: String,
    pub catalog_source: String,
    pub total: usize,
    pub records: Vec<ProductRecord>,
}

impl SearchResult {
    pub fn shown(&self) -> usize {
        self.records.len()
    }
}

#[derive(Debug, Serialize)]
pub struct DetailResult {
    pub record: ProductRecord,
    pub b2b_notes: Vec<String>,
    pub catalog_pdf: String,
    pub whatsapp_link: String,
}

#[derive(Debug, Serialize)]
pub struct PricingResult {
    pub requested: Option<i64>,
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub quote: PriceQuote,
    pub tiers: Vec<TierBand>,
    pub wholesale_includes: Vec<String>,
}
