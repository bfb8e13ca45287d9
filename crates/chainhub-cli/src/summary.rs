use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chainhub_catalog::{CatalogReport, InquiryAck, QuoteAck, SiteProfile};
use chainhub_model::ProductRecord;

use crate::types::{DetailResult, PricingResult, SearchResult};

pub fn print_search(result: &SearchResult) {
    println!("{}", search_table(result));
    println!("Showing {} SKUs", result.shown());
}

pub fn search_table(result: &SearchResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("SKU"),
        header_cell("Name"),
        header_cell("Metal • Style • Finish"),
        header_cell("THK"),
        header_cell("LEN"),
        header_cell("WT"),
        header_cell("Tags"),
    ]);
    apply_table_style(&mut table);
    // One line per SKU.
    table.set_content_arrangement(ContentArrangement::Disabled);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    if result.records.is_empty() {
        table.add_row(vec![
            dim_cell("-"),
            dim_cell("No SKUs match the search"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    for record in &result.records {
        table.add_row(vec![
            sku_cell(record),
            Cell::new(&record.name),
            Cell::new(record.card_line()),
            Cell::new(record.thickness_label()),
            Cell::new(record.length_label()),
            Cell::new(record.weight_label()),
            tags_cell(record.card_tags()),
        ]);
    }
    table
}

pub fn print_detail(result: &DetailResult) {
    let record = &result.record;
    println!("CHAIN SKU {}", record.id);
    println!("{}", record.name);
    println!("{}", record.spec_line());
    println!();
    println!("{}", detail_table(result));
    println!("Download Catalog (PDF): {}", result.catalog_pdf);
    println!("WhatsApp: {}", result.whatsapp_link);
}

pub fn detail_table(result: &DetailResult) -> Table {
    let record = &result.record;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let rows = [
        ("Metal", record.metal.to_string()),
        ("Style", record.style.to_string()),
        ("Finish", record.finish.to_string()),
        ("Thickness", record.thickness_label()),
        ("Length", record.length_label()),
        ("Weight", record.weight_label()),
    ];
    for (label, value) in rows {
        table.add_row(vec![dim_cell(label), Cell::new(value)]);
    }
    table.add_row(vec![dim_cell("Tags"), tags_cell(&record.tags)]);
    table.add_row(vec![
        dim_cell("B2B Notes"),
        Cell::new(bullets(&result.b2b_notes)),
    ]);
    table
}

pub fn print_pricing(result: &PricingResult) {
    if let Some(note) = selector_note(result) {
        println!("{note}");
    }
    println!("{}", quote_table(result));
    println!("{}", tier_table(result));
    println!("Wholesale includes:");
    for item in &result.wholesale_includes {
        println!("- {item}");
    }
}

/// Explains the snap when the requested MOQ is not a selector position.
pub fn selector_note(result: &PricingResult) -> Option<String> {
    let requested = result.requested?;
    let selected = result.quote.quantity;
    (requested != selected).then(|| {
        format!(
            "Requested {requested} pcs; selector range is {}-{} in steps of {}, using {selected} pcs",
            result.min, result.max, result.step
        )
    })
}

pub fn quote_table(result: &PricingResult) -> Table {
    let quote = &result.quote;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("MOQ"),
        header_cell("Discount"),
        header_cell("Price Index"),
        header_cell("Lead Time"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(format!("{} pcs", quote.quantity)).add_attribute(Attribute::Bold),
        Cell::new(format!("{}%", quote.discount_percent)).fg(Color::Green),
        Cell::new(quote.price_index),
        Cell::new(quote.lead_time),
    ]);
    table
}

pub fn tier_table(result: &PricingResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Quantity"),
        header_cell("Discount"),
        header_cell("Price Index"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for band in &result.tiers {
        let active = band.discount_percent == result.quote.discount_percent;
        let row = vec![
            Cell::new(&band.label),
            Cell::new(format!("{}%", band.discount_percent)),
            Cell::new(band.price_index),
        ];
        if active {
            table.add_row(
                row.into_iter()
                    .map(|cell| cell.fg(Color::Green).add_attribute(Attribute::Bold)),
            );
        } else {
            table.add_row(row);
        }
    }
    table
}

pub fn print_ack(ack: &InquiryAck) {
    println!("{}", ack.notice);
    let inquiry = &ack.inquiry;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let optional = |value: Option<String>| value.map_or_else(|| dim_cell("-"), Cell::new);
    table.add_row(vec![dim_cell("Company"), Cell::new(&inquiry.company)]);
    table.add_row(vec![dim_cell("Name"), Cell::new(&inquiry.contact_name)]);
    table.add_row(vec![dim_cell("Phone"), Cell::new(&inquiry.phone)]);
    table.add_row(vec![dim_cell("Style"), Cell::new(inquiry.style)]);
    table.add_row(vec![dim_cell("Metal"), Cell::new(inquiry.metal)]);
    table.add_row(vec![
        dim_cell("Thickness"),
        optional(inquiry.thickness_mm.map(|mm| format!("{mm:.1}mm"))),
    ]);
    table.add_row(vec![
        dim_cell("Length"),
        optional(inquiry.length_inches.map(|inches| format!("{inches}\""))),
    ]);
    table.add_row(vec![
        dim_cell("Quantity"),
        optional(inquiry.quantity.map(|pcs| format!("{pcs} pcs"))),
    ]);
    table.add_row(vec![dim_cell("Note"), optional(inquiry.note.clone())]);
    println!("{table}");
    println!("Received: {}", ack.received_at.to_rfc3339());
}

pub fn print_quote_ack(ack: &QuoteAck) {
    println!("{}", ack.notice);
    let request = &ack.request;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        dim_cell("SKU"),
        Cell::new(&request.sku)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![dim_cell("Company"), Cell::new(&request.company)]);
    table.add_row(vec![dim_cell("Phone"), Cell::new(&request.phone)]);
    table.add_row(vec![
        dim_cell("Quantity"),
        request
            .quantity
            .map_or_else(|| dim_cell("-"), |pcs| Cell::new(format!("{pcs} pcs"))),
    ]);
    println!("{table}");
    println!("Received: {}", ack.received_at.to_rfc3339());
}

pub fn print_profile(profile: &SiteProfile) {
    println!("{} - {}", profile.business_name, profile.tagline);
    println!("{}", profile.headline);
    println!("{}", profile.badges.join(" | "));
    println!();
    println!(
        "Contact: {} | {} | {}",
        profile.contact_name,
        profile.phone,
        profile.whatsapp_link()
    );
    println!("Call: {}", profile.call_link());
    println!("Catalog PDF: {}", profile.catalog_pdf);
    println!();

    let mut process = Table::new();
    process.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut process);
    align_column(&mut process, 0, CellAlignment::Right);
    for (index, step) in profile.process.iter().enumerate() {
        process.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&step.title).add_attribute(Attribute::Bold),
            Cell::new(&step.detail),
        ]);
    }
    println!("Order process:");
    println!("{process}");

    let mut faq = Table::new();
    faq.set_header(vec![header_cell("Question"), header_cell("Answer")]);
    apply_table_style(&mut faq);
    for entry in &profile.faq {
        faq.add_row(vec![
            Cell::new(&entry.question).add_attribute(Attribute::Bold),
            Cell::new(&entry.answer),
        ]);
    }
    println!("FAQ:");
    println!("{faq}");
}

pub fn print_report(report: &CatalogReport) {
    println!("Catalog: {}", report.source);
    println!("SHA-256: {}", report.sha256);
    println!("{}", report_table(report));
    if report.duplicate_ids.is_empty() {
        println!("No duplicate SKU ids.");
    } else {
        eprintln!("Duplicate SKU ids:");
        for id in &report.duplicate_ids {
            eprintln!("- {id}");
        }
    }
}

pub fn report_table(report: &CatalogReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Value"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let counts = &report.counts;
    let groups = [
        ("Style", &counts.styles),
        ("Metal", &counts.metals),
        ("Finish", &counts.finishes),
    ];
    for (group, values) in groups {
        for (value, count) in values {
            table.add_row(vec![dim_cell(group), Cell::new(value), Cell::new(count)]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(counts.records).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn sku_cell(record: &ProductRecord) -> Cell {
    Cell::new(&record.id)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn tags_cell(tags: &[String]) -> Cell {
    if tags.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(tags.join(", "))
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
