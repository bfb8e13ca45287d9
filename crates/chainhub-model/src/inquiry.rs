//! Wholesale inquiry form payload.
//!
//! The serialized form of [`Inquiry`] is the payload a future backend would
//! receive. No backend exists; see the placeholder sink in `chainhub-catalog`.

use serde::{Deserialize, Serialize};

use crate::ModelError;
use crate::enums::{ChainStyle, Metal};
use crate::ids::Sku;
use crate::product::ProductRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Company or shop name.
    pub company: String,
    pub contact_name: String,
    /// Phone or WhatsApp number, free text.
    pub phone: String,
    pub style: ChainStyle,
    pub metal: Metal,
    pub thickness_mm: Option<f64>,
    pub length_inches: Option<u32>,
    /// Requested quantity in pieces.
    pub quantity: Option<u32>,
    pub note: Option<String>,
}

impl Inquiry {
    pub fn new(
        company: impl Into<String>,
        contact_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            contact_name: contact_name.into(),
            phone: phone.into(),
            style: ChainStyle::default(),
            metal: Metal::default(),
            thickness_mm: None,
            length_inches: None,
            quantity: None,
            note: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChainStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_metal(mut self, metal: Metal) -> Self {
        self.metal = metal;
        self
    }

    #[must_use]
    pub fn with_thickness(mut self, thickness_mm: Option<f64>) -> Self {
        self.thickness_mm = thickness_mm;
        self
    }

    #[must_use]
    pub fn with_length(mut self, length_inches: Option<u32>) -> Self {
        self.length_inches = length_inches;
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: Option<u32>) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|text| !text.trim().is_empty());
        self
    }

    /// Copy style, metal, thickness and length from a catalog record.
    #[must_use]
    pub fn prefilled_from(mut self, record: &ProductRecord) -> Self {
        self.style = record.style;
        self.metal = record.metal;
        self.thickness_mm = Some(record.thickness_mm);
        self.length_inches = Some(record.length_inches);
        self
    }

    /// Required: company, contact name, phone. Numeric fields must be
    /// positive when present.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.company.trim().is_empty() {
            return Err(ModelError::MissingField("company"));
        }
        if self.contact_name.trim().is_empty() {
            return Err(ModelError::MissingField("contact_name"));
        }
        if self.phone.trim().is_empty() {
            return Err(ModelError::MissingField("phone"));
        }
        if let Some(thickness) = self.thickness_mm
            && !(thickness.is_finite() && thickness > 0.0)
        {
            return Err(ModelError::InvalidField {
                field: "thickness_mm",
                message: format!("must be a positive number, got {thickness}"),
            });
        }
        if self.length_inches == Some(0) {
            return Err(ModelError::InvalidField {
                field: "length_inches",
                message: "must be positive".to_string(),
            });
        }
        if self.quantity == Some(0) {
            return Err(ModelError::InvalidField {
                field: "quantity",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Quick quote request from the SKU detail view: company, phone and an
/// optional quantity for one catalog SKU. No contact name is collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickQuote {
    pub sku: Sku,
    pub company: String,
    pub phone: String,
    pub quantity: Option<u32>,
}

impl QuickQuote {
    pub fn new(sku: Sku, company: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            sku,
            company: company.into(),
            phone: phone.into(),
            quantity: None,
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: Option<u32>) -> Self {
        self.quantity = quantity;
        self
    }

    /// Required: company, phone. Quantity must be positive when present.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.company.trim().is_empty() {
            return Err(ModelError::MissingField("company"));
        }
        if self.phone.trim().is_empty() {
            return Err(ModelError::MissingField("phone"));
        }
        if self.quantity == Some(0) {
            return Err(ModelError::InvalidField {
                field: "quantity",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
