use chainhub_catalog::{
    DISCOUNT_TIERS, LEAD_TIME, MOQ_SELECTOR, discount_percent, price_index, quote, tier_bands,
};
use proptest::prelude::*;

#[test]
fn discount_tier_boundaries() {
    let cases = [
        (10, 3),
        (24, 3),
        (25, 5),
        (49, 5),
        (50, 8),
        (99, 8),
        (100, 12),
        (150, 12),
    ];
    for (quantity, expected) in cases {
        assert_eq!(discount_percent(quantity), expected, "quantity {quantity}");
    }
}

#[test]
fn discount_is_total_below_selector_range() {
    assert_eq!(discount_percent(0), 3);
    assert_eq!(discount_percent(-5), 3);
    assert_eq!(discount_percent(i64::MIN), 3);
    assert_eq!(discount_percent(i64::MAX), 12);
}

#[test]
fn price_index_per_tier() {
    assert_eq!(price_index(10), 97);
    assert_eq!(price_index(30), 95);
    assert_eq!(price_index(50), 92);
    assert_eq!(price_index(100), 88);
}

#[test]
fn quote_carries_lead_time() {
    let quote = quote(i64::from(MOQ_SELECTOR.default_quantity()));
    assert_eq!(quote.quantity, 50);
    assert_eq!(quote.discount_percent, 8);
    assert_eq!(quote.price_index, 92);
    assert_eq!(quote.lead_time, LEAD_TIME);
}

#[test]
fn tier_table_renders_every_band() {
    let rendered = tier_bands()
        .iter()
        .map(|band| {
            format!(
                "{} => {}% / {}",
                band.label, band.discount_percent, band.price_index
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    100+ => 12% / 88
    50–99 => 8% / 92
    25–49 => 5% / 95
    < 25 => 3% / 97
    ");
}

#[test]
fn tier_table_matches_lookup() {
    for tier in DISCOUNT_TIERS {
        assert_eq!(discount_percent(tier.min_quantity), tier.percent);
        assert!(discount_percent(tier.min_quantity - 1) < tier.percent);
    }
}

proptest! {
    #[test]
    fn discount_is_monotonic(a in -1_000i64..1_000, b in -1_000i64..1_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(discount_percent(low) <= discount_percent(high));
    }

    #[test]
    fn price_index_is_one_hundred_minus_discount(quantity in any::<i64>()) {
        prop_assert_eq!(price_index(quantity), 100 - i64::from(discount_percent(quantity)));
    }

    #[test]
    fn selector_output_stays_in_range(requested in any::<i64>()) {
        let selected = MOQ_SELECTOR.select(requested);
        prop_assert!(MOQ_SELECTOR.contains(selected));
        prop_assert_eq!((selected - MOQ_SELECTOR.min()) % MOQ_SELECTOR.step(), 0);
    }
}
