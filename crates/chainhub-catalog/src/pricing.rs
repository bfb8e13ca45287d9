//! MOQ discount tiers and the derived price index.
//!
//! The tier model is cosmetic: it drives the discount and price-index
//! figures shown next to the MOQ selector and is not a pricing engine.
//! `price_index` rounds half away from zero.

use serde::Serialize;

/// A quantity band with a closed lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountTier {
    pub min_quantity: i64,
    pub percent: u8,
}

/// Tiers ordered highest threshold first. Quantities below the last
/// threshold get [`BASE_DISCOUNT_PERCENT`].
pub const DISCOUNT_TIERS: [DiscountTier; 3] = [
    DiscountTier {
        min_quantity: 100,
        percent: 12,
    },
    DiscountTier {
        min_quantity: 50,
        percent: 8,
    },
    DiscountTier {
        min_quantity: 25,
        percent: 5,
    },
];

pub const BASE_DISCOUNT_PERCENT: u8 = 3;

pub const PRICE_INDEX_BASE: i64 = 100;

/// Dispatch lead time shown beside every quote.
pub const LEAD_TIME: &str = "24–72h";

/// Discount percentage for an order quantity. Total over all integers.
pub fn discount_percent(quantity: i64) -> u8 {
    DISCOUNT_TIERS
        .iter()
        .find(|tier| quantity >= tier.min_quantity)
        .map_or(BASE_DISCOUNT_PERCENT, |tier| tier.percent)
}

/// `round(100 * (1 - discount_percent(quantity) / 100))`.
pub fn price_index(quantity: i64) -> i64 {
    price_index_for_percent(discount_percent(quantity))
}

pub fn price_index_for_percent(percent: u8) -> i64 {
    let scaled = PRICE_INDEX_BASE * (100 - i64::from(percent));
    round_half_away_from_zero(scaled, 100)
}

fn round_half_away_from_zero(numerator: i64, denominator: i64) -> i64 {
    let half = denominator / 2;
    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        -((-numerator + half) / denominator)
    }
}

/// Discount figures for one quantity, as shown in the pricing panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub quantity: i64,
    pub discount_percent: u8,
    pub price_index: i64,
    pub lead_time: &'static str,
}

pub fn quote(quantity: i64) -> PriceQuote {
    let percent = discount_percent(quantity);
    PriceQuote {
        quantity,
        discount_percent: percent,
        price_index: price_index_for_percent(percent),
        lead_time: LEAD_TIME,
    }
}

/// A printable row of the tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierBand {
    pub label: String,
    pub discount_percent: u8,
    pub price_index: i64,
}

/// The tier table from the highest band down, including the base band.
pub fn tier_bands() -> Vec<TierBand> {
    let mut bands = Vec::with_capacity(DISCOUNT_TIERS.len() + 1);
    let mut upper: Option<i64> = None;
    for tier in DISCOUNT_TIERS {
        let label = match upper {
            Some(next) => format!("{}–{}", tier.min_quantity, next - 1),
            None => format!("{}+", tier.min_quantity),
        };
        bands.push(TierBand {
            label,
            discount_percent: tier.percent,
            price_index: price_index_for_percent(tier.percent),
        });
        upper = Some(tier.min_quantity);
    }
    let lowest = DISCOUNT_TIERS
        .last()
        .map_or(PRICE_INDEX_BASE, |tier| tier.min_quantity);
    bands.push(TierBand {
        label: format!("< {lowest}"),
        discount_percent: BASE_DISCOUNT_PERCENT,
        price_index: price_index_for_percent(BASE_DISCOUNT_PERCENT),
    });
    bands
}
