//! The compiled-in wholesale catalog.

use chainhub_model::{ChainStyle, Finish, Metal, ProductRecord, Sku};

struct BuiltinSku {
    id: &'static str,
    name: &'static str,
    style: ChainStyle,
    metal: Metal,
    finish: Finish,
    thickness_mm: f64,
    length_inches: u32,
    weight_grams: u32,
    tags: [&'static str; 3],
}

const BUILTIN_SKUS: [BuiltinSku; 8] = [
    BuiltinSku {
        id: "SS-ROP-GLD-28",
        name: "Rope Chain • Heavy Shine",
        style: ChainStyle::Rope,
        metal: Metal::Gold,
        finish: Finish::Polished,
        thickness_mm: 3.0,
        length_inches: 22,
        weight_grams: 18,
        tags: ["Fast Moving", "High Margin", "Premium Finish"],
    },
    BuiltinSku {
        id: "SS-CUB-SLV-11",
        name: "Cuban Chain • Daily Wear",
        style: ChainStyle::Cuban,
        metal: Metal::Silver,
        finish: Finish::Polished,
        thickness_mm: 2.2,
        length_inches: 20,
        weight_grams: 12,
        tags: ["Best Seller", "Repeat Orders", "Comfort Fit"],
    },
    BuiltinSku {
        id: "SS-FIG-GLD-08",
        name: "Figaro Chain • Classic",
        style: ChainStyle::Figaro,
        metal: Metal::Gold,
        finish: Finish::DiamondCut,
        thickness_mm: 2.5,
        length_inches: 24,
        weight_grams: 16,
        tags: ["Trending", "Gift Segment", "Sharp Look"],
    },
    BuiltinSku {
        id: "SS-BOX-RSG-02",
        name: "Box Chain • Minimal",
        style: ChainStyle::Box,
        metal: Metal::RoseGold,
        finish: Finish::Polished,
        thickness_mm: 1.6,
        length_inches: 18,
        weight_grams: 8,
        tags: ["Premium Minimal", "Youth Trend", "Layering"],
    },
    BuiltinSku {
        id: "SS-WHT-SLV-19",
        name: "Wheat Chain • Premium",
        style: ChainStyle::Wheat,
        metal: Metal::Silver,
        finish: Finish::Matte,
        thickness_mm: 2.8,
        length_inches: 22,
        weight_grams: 15,
        tags: ["Luxury Feel", "High Repeat", "Good Finish"],
    },
    BuiltinSku {
        id: "SS-FRN-GLD-55",
        name: "Franco Chain • Strong Links",
        style: ChainStyle::Franco,
        metal: Metal::Gold,
        finish: Finish::Polished,
        thickness_mm: 3.4,
        length_inches: 24,
        weight_grams: 22,
        tags: ["Bridal", "Heavy Demand", "Strong Build"],
    },
    BuiltinSku {
        id: "SS-SNK-SLV-31",
        name: "Snake Chain • Smooth",
        style: ChainStyle::Snake,
        metal: Metal::Silver,
        finish: Finish::Polished,
        thickness_mm: 1.9,
        length_inches: 20,
        weight_grams: 10,
        tags: ["Daily Wear", "Smooth Look", "Comfort"],
    },
    BuiltinSku {
        id: "SS-CRB-GLD-77",
        name: "Curb Chain • Bold",
        style: ChainStyle::Curb,
        metal: Metal::Gold,
        finish: Finish::DiamondCut,
        thickness_mm: 3.2,
        length_inches: 22,
        weight_grams: 20,
        tags: ["High Shine", "Premium", "Fast Selling"],
    },
];

/// Source label reported for the compiled-in table.
pub const BUILTIN_SOURCE: &str = "builtin";

/// The eight catalog records, in display order.
pub fn builtin_records() -> Vec<ProductRecord> {
    BUILTIN_SKUS
        .iter()
        .filter_map(|sku| {
            let id = Sku::new(sku.id).ok()?;
            Some(ProductRecord {
                id,
                name: sku.name.to_string(),
                style: sku.style,
                metal: sku.metal,
                finish: sku.finish,
                thickness_mm: sku.thickness_mm,
                length_inches: sku.length_inches,
                weight_grams: sku.weight_grams,
                tags: sku.tags.iter().map(|tag| (*tag).to_string()).collect(),
            })
        })
        .collect()
}
