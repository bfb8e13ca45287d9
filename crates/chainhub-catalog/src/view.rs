//! Page state held by the view layer: search query, selected quantity,
//! and the record open in the detail view.

use chainhub_model::ProductRecord;
use tracing::debug;

use crate::catalog::Catalog;
use crate::filter::{SearchQuery, filter_with};
use crate::pricing::{PriceQuote, quote};
use crate::quantity::{MOQ_SELECTOR, MoqSelector};

#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    query: SearchQuery,
    selector: MoqSelector,
    quantity: u32,
    selected: Option<usize>,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_selector(catalog, MOQ_SELECTOR)
    }

    pub fn with_selector(catalog: Catalog, selector: MoqSelector) -> Self {
        let quantity = selector.select(i64::from(selector.default_quantity()));
        Self {
            catalog,
            query: SearchQuery::default(),
            selector,
            quantity,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = SearchQuery::new(raw);
        debug!(query = %self.query.as_str(), "search query updated");
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Records matching the current query, in catalog order.
    pub fn visible(&self) -> Vec<&ProductRecord> {
        filter_with(self.catalog.records(), &self.query)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    /// Move the selector; returns the quantity actually selected.
    pub fn set_quantity(&mut self, requested: i64) -> u32 {
        self.quantity = self.selector.select(requested);
        if i64::from(self.quantity) != requested {
            debug!(requested, selected = self.quantity, "quantity adjusted to selector");
        }
        self.quantity
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn quote(&self) -> PriceQuote {
        quote(i64::from(self.quantity))
    }

    /// Open a record in the detail view. Unknown SKUs leave the current
    /// selection untouched and return false.
    pub fn select(&mut self, sku: &str) -> bool {
        match self
            .catalog
            .records()
            .iter()
            .position(|record| record.id.matches(sku))
        {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&ProductRecord> {
        self.selected
            .and_then(|index| self.catalog.records().get(index))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
