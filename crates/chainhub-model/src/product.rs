//! Catalog product records.

use serde::{Deserialize, Serialize};

use crate::ModelError;
use crate::enums::{ChainStyle, Finish, Metal};
use crate::ids::Sku;

/// Number of tags shown on a catalog card. The detail view shows all of them.
pub const CARD_TAG_LIMIT: usize = 2;

/// A single chain SKU in the wholesale catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: Sku,
    pub name: String,
    pub style: ChainStyle,
    pub metal: Metal,
    pub finish: Finish,
    pub thickness_mm: f64,
    pub length_inches: u32,
    /// Approximate weight.
    pub weight_grams: u32,
    /// Ordered; card views truncate to [`CARD_TAG_LIMIT`].
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductRecord {
    /// Text the catalog search runs against: `"{name} {id}"`, lower-cased.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.id).to_lowercase()
    }

    pub fn thickness_label(&self) -> String {
        format!("{:.1}mm", self.thickness_mm)
    }

    pub fn length_label(&self) -> String {
        format!("{}\"", self.length_inches)
    }

    pub fn weight_label(&self) -> String {
        format!("~{}g", self.weight_grams)
    }

    /// Short attribute line used on catalog cards: `Gold • Rope • Polished`.
    pub fn card_line(&self) -> String {
        format!("{} • {} • {}", self.metal, self.style, self.finish)
    }

    /// Full attribute line used in the detail view.
    pub fn spec_line(&self) -> String {
        format!(
            "{} • {} • {} • {}",
            self.card_line(),
            self.thickness_label(),
            self.length_label(),
            self.weight_label()
        )
    }

    pub fn card_tags(&self) -> &[String] {
        let end = self.tags.len().min(CARD_TAG_LIMIT);
        &self.tags[..end]
    }

    /// Checks the content rules a loaded record must satisfy.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::MissingField("name"));
        }
        if !(self.thickness_mm.is_finite() && self.thickness_mm > 0.0) {
            return Err(ModelError::InvalidField {
                field: "thickness_mm",
                message: format!("must be a positive number, got {}", self.thickness_mm),
            });
        }
        if self.length_inches == 0 {
            return Err(ModelError::InvalidField {
                field: "length_inches",
                message: "must be positive".to_string(),
            });
        }
        if self.weight_grams == 0 {
            return Err(ModelError::InvalidField {
                field: "weight_grams",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
