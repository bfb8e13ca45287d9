use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chainhub_catalog::{
    Catalog, CatalogReport, CatalogView, InquiryAck, InquirySink, MOQ_SELECTOR, PlaceholderSink,
    QuoteAck, SiteProfile, load_default_catalog, quote, tier_bands,
};
use chainhub_model::{Inquiry, QuickQuote};
use tracing::{debug, info, info_span, warn};

use crate::cli::{InquireArgs, QuoteArgs, SearchArgs};
use crate::types::{DetailResult, PricingResult, SearchResult};

pub fn open_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    let catalog = load_default_catalog(explicit).context("load catalog")?;
    info!(
        source = %catalog.source(),
        records = catalog.len(),
        "catalog ready"
    );
    Ok(catalog)
}

pub fn run_search(catalog: Catalog, args: &SearchArgs) -> SearchResult {
    let raw = args.query.join(" ");
    let mut view = CatalogView::new(catalog);
    view.set_query(&raw);
    let records = view.visible().into_iter().cloned().collect();
    SearchResult {
        query: view.query().as_str().to_string(),
        catalog_source: view.catalog().source().to_string(),
        total: view.catalog().len(),
        records,
    }
}

pub fn run_show(catalog: Catalog, sku: &str, profile: &SiteProfile) -> Result<DetailResult> {
    let mut view = CatalogView::new(catalog);
    view.select(sku);
    let record = view
        .selected()
        .cloned()
        .ok_or_else(|| anyhow!("unknown SKU: {}", sku.trim()))?;
    Ok(DetailResult {
        record,
        b2b_notes: profile.b2b_notes.clone(),
        catalog_pdf: profile.catalog_pdf.clone(),
        whatsapp_link: profile.whatsapp_link(),
    })
}

/// Snap the requested MOQ onto the selector and quote it. Without a request
/// the selector default is quoted.
pub fn run_pricing(requested: Option<i64>, profile: &SiteProfile) -> PricingResult {
    let selected = requested.map_or(MOQ_SELECTOR.default_quantity(), |value| {
        MOQ_SELECTOR.select(value)
    });
    debug!(?requested, selected, "moq selector");
    PricingResult {
        requested,
        min: MOQ_SELECTOR.min(),
        max: MOQ_SELECTOR.max(),
        step: MOQ_SELECTOR.step(),
        quote: quote(i64::from(selected)),
        tiers: tier_bands(),
        wholesale_includes: profile.wholesale_includes.clone(),
    }
}

/// Build the inquiry from form flags. A `--sku` pre-fills style, metal,
/// thickness and length; explicit flags override the pre-filled values.
pub fn build_inquiry(catalog: &Catalog, args: &InquireArgs) -> Result<Inquiry> {
    let mut inquiry = Inquiry::new(&args.company, &args.name, &args.phone);
    if let Some(sku) = &args.sku {
        let record = catalog
            .find(sku)
            .ok_or_else(|| anyhow!("unknown SKU: {}", sku.trim()))?;
        inquiry = inquiry.prefilled_from(record);
    }
    if let Some(style) = args.style {
        inquiry = inquiry.with_style(style.into());
    }
    if let Some(metal) = args.metal {
        inquiry = inquiry.with_metal(metal.into());
    }
    if args.thickness.is_some() {
        inquiry = inquiry.with_thickness(args.thickness);
    }
    if args.length.is_some() {
        inquiry = inquiry.with_length(args.length);
    }
    Ok(inquiry
        .with_quantity(args.quantity)
        .with_note(args.note.clone()))
}

pub fn run_inquire(catalog: &Catalog, args: &InquireArgs, log_contact: bool) -> Result<InquiryAck> {
    let inquiry = build_inquiry(catalog, args)?;
    let sink = PlaceholderSink::new().with_contact_logging(log_contact);
    let ack = sink.submit(inquiry).context("submit inquiry")?;
    Ok(ack)
}

/// Quick quote for one SKU from the detail view. The SKU must exist; the
/// stored id keeps the catalog's casing.
pub fn run_quote(catalog: &Catalog, args: &QuoteArgs, log_contact: bool) -> Result<QuoteAck> {
    let record = catalog
        .find(&args.sku)
        .ok_or_else(|| anyhow!("unknown SKU: {}", args.sku.trim()))?;
    let request = QuickQuote::new(record.id.clone(), &args.company, &args.phone)
        .with_quantity(args.quantity);
    let sink = PlaceholderSink::new().with_contact_logging(log_contact);
    let ack = sink.submit_quote(request).context("submit quick quote")?;
    Ok(ack)
}

pub fn run_doctor(catalog: &Catalog) -> CatalogReport {
    let span = info_span!("doctor", source = %catalog.source());
    let _guard = span.enter();
    let report = CatalogReport::from_catalog(catalog);
    for id in &report.duplicate_ids {
        warn!(sku = %id, "duplicate SKU id in catalog");
    }
    report
}
