//! Tests for chainhub-model types.

use chainhub_model::{
    ChainStyle, Finish, Inquiry, Metal, ModelError, ProductRecord, QuickQuote, Sku,
};

fn sample_record() -> ProductRecord {
    ProductRecord {
        id: Sku::new("SS-BOX-RSG-02").unwrap(),
        name: "Box Chain • Minimal".to_string(),
        style: ChainStyle::Box,
        metal: Metal::RoseGold,
        finish: Finish::Polished,
        thickness_mm: 1.6,
        length_inches: 18,
        weight_grams: 8,
        tags: vec![
            "Premium Minimal".to_string(),
            "Youth Trend".to_string(),
            "Layering".to_string(),
        ],
    }
}

#[test]
fn enums_parse_display_and_snake_case_names() {
    assert_eq!("Rose Gold".parse::<Metal>(), Ok(Metal::RoseGold));
    assert_eq!("rose_gold".parse::<Metal>(), Ok(Metal::RoseGold));
    assert_eq!("DIAMOND CUT".parse::<Finish>(), Ok(Finish::DiamondCut));
    assert_eq!(" cuban ".parse::<ChainStyle>(), Ok(ChainStyle::Cuban));
}

#[test]
fn enums_reject_unknown_values() {
    assert_eq!(
        "Platinum".parse::<Metal>(),
        Err(ModelError::UnknownMetal("Platinum".to_string()))
    );
    assert!("Ball".parse::<ChainStyle>().is_err());
    assert!("Brushed".parse::<Finish>().is_err());
}

#[test]
fn enum_order_matches_inquiry_form() {
    let names: Vec<&str> = ChainStyle::ALL.iter().map(ChainStyle::as_str).collect();
    assert_eq!(
        names,
        vec!["Rope", "Curb", "Figaro", "Box", "Franco", "Cuban", "Wheat", "Snake"]
    );
    assert_eq!(ChainStyle::default(), ChainStyle::Rope);
    assert_eq!(Metal::default(), Metal::Gold);
}

#[test]
fn sku_trims_and_rejects_empty() {
    let sku = Sku::new("  SS-ROP-GLD-28 ").unwrap();
    assert_eq!(sku.as_str(), "SS-ROP-GLD-28");
    assert!(sku.matches("ss-rop-gld-28"));
    assert!(matches!(Sku::new("   "), Err(ModelError::InvalidSku(_))));
}

#[test]
fn record_labels_match_catalog_cards() {
    let record = sample_record();
    assert_eq!(record.card_line(), "Rose Gold • Box • Polished");
    assert_eq!(
        record.spec_line(),
        "Rose Gold • Box • Polished • 1.6mm • 18\" • ~8g"
    );
    assert_eq!(record.card_tags(), ["Premium Minimal", "Youth Trend"]);
    assert_eq!(record.search_text(), "box chain • minimal ss-box-rsg-02");
}

#[test]
fn card_tags_handles_short_lists() {
    let mut record = sample_record();
    record.tags.truncate(1);
    assert_eq!(record.card_tags(), ["Premium Minimal"]);
    record.tags.clear();
    assert!(record.card_tags().is_empty());
}

#[test]
fn record_validation_rejects_non_positive_measurements() {
    let mut record = sample_record();
    assert!(record.validate().is_ok());
    record.thickness_mm = 0.0;
    assert!(matches!(
        record.validate(),
        Err(ModelError::InvalidField {
            field: "thickness_mm",
            ..
        })
    ));
    let mut record = sample_record();
    record.weight_grams = 0;
    assert!(record.validate().is_err());
}

#[test]
fn record_serializes_with_display_names() {
    let json = serde_json::to_value(sample_record()).expect("serialize record");
    assert_eq!(json["id"], "SS-BOX-RSG-02");
    assert_eq!(json["metal"], "Rose Gold");
    assert_eq!(json["finish"], "Polished");
    let round: ProductRecord = serde_json::from_value(json).expect("deserialize record");
    assert_eq!(round, sample_record());
}

#[test]
fn inquiry_requires_contact_fields() {
    let inquiry = Inquiry::new("Sai Traders", "", "+91 90000 00000");
    assert_eq!(
        inquiry.validate(),
        Err(ModelError::MissingField("contact_name"))
    );
    let inquiry = Inquiry::new(" ", "Ravi", "+91 90000 00000");
    assert_eq!(inquiry.validate(), Err(ModelError::MissingField("company")));
}

#[test]
fn inquiry_rejects_zero_quantity() {
    let inquiry = Inquiry::new("Sai Traders", "Ravi", "+91 90000 00000").with_quantity(Some(0));
    assert!(matches!(
        inquiry.validate(),
        Err(ModelError::InvalidField {
            field: "quantity",
            ..
        })
    ));
}

#[test]
fn inquiry_prefill_copies_record_attributes() {
    let inquiry = Inquiry::new("Sai Traders", "Ravi", "+91 90000 00000")
        .with_note(Some("   ".to_string()))
        .prefilled_from(&sample_record());
    assert_eq!(inquiry.style, ChainStyle::Box);
    assert_eq!(inquiry.metal, Metal::RoseGold);
    assert_eq!(inquiry.thickness_mm, Some(1.6));
    assert_eq!(inquiry.length_inches, Some(18));
    assert_eq!(inquiry.note, None);
    assert!(inquiry.validate().is_ok());
}

#[test]
fn quick_quote_needs_no_contact_name() {
    let sku = Sku::new("SS-BOX-RSG-02").unwrap();
    let quote = QuickQuote::new(sku.clone(), "Sai Traders", "+91 90000 00000");
    assert_eq!(quote.validate(), Ok(()));

    let quote = QuickQuote::new(sku.clone(), "Sai Traders", "  ");
    assert_eq!(quote.validate(), Err(ModelError::MissingField("phone")));

    let quote = QuickQuote::new(sku, "Sai Traders", "+91 90000 00000").with_quantity(Some(0));
    assert!(matches!(
        quote.validate(),
        Err(ModelError::InvalidField {
            field: "quantity",
            ..
        })
    ));
}
