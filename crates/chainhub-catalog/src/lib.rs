//! Catalog search, MOQ pricing tiers, and inquiry handling for the
//! chain wholesale catalog.

#![deny(unsafe_code)]

pub mod builtin;
pub mod catalog;
pub mod doctor;
pub mod error;
pub mod filter;
pub mod inquiry;
pub mod loader;
pub mod pricing;
pub mod quantity;
pub mod site;
pub mod view;

pub use crate::builtin::builtin_records;
pub use crate::catalog::{Catalog, CatalogSource};
pub use crate::doctor::{CatalogCounts, CatalogReport};
pub use crate::error::CatalogError;
pub use crate::filter::{SearchQuery, filter, filter_with, matches};
pub use crate::inquiry::{
    InquiryAck, InquirySink, PLACEHOLDER_NOTICE, PlaceholderSink, QUICK_QUOTE_NOTICE, QuoteAck,
};
pub use crate::loader::{
    CATALOG_ENV_VAR, load_catalog, load_default_catalog, resolve_catalog_path,
    resolve_catalog_path_from,
};
pub use crate::pricing::{
    DISCOUNT_TIERS, DiscountTier, LEAD_TIME, PriceQuote, TierBand, discount_percent, price_index,
    quote, tier_bands,
};
pub use crate::quantity::{MOQ_SELECTOR, MoqSelector};
pub use crate::site::{FaqEntry, ProcessStep, SiteProfile};
pub use crate::view::CatalogView;
