//! Inquiry submission.
//!
//! There is no backend. [`PlaceholderSink`] validates the form and returns
//! the same acknowledgment the page shows; nothing leaves the process.

use chainhub_model::{Inquiry, QuickQuote};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span};

use crate::error::CatalogError;

/// Notice returned by the placeholder sink.
pub const PLACEHOLDER_NOTICE: &str =
    "Demo: form submitted. Connect this to your backend/CRM/WhatsApp.";

/// Notice returned for a quick quote from the SKU detail view.
pub const QUICK_QUOTE_NOTICE: &str = "Demo: connect this to your backend / WhatsApp.";

/// Placeholder used in logs when contact logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

#[derive(Debug, Clone, Serialize)]
pub struct InquiryAck {
    pub notice: String,
    /// False for every sink in this crate.
    pub delivered: bool,
    pub received_at: DateTime<Utc>,
    pub inquiry: Inquiry,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteAck {
    pub notice: String,
    pub delivered: bool,
    pub received_at: DateTime<Utc>,
    pub request: QuickQuote,
}

/// Extension point for a real inquiry backend (CRM, messaging API, ...).
pub trait InquirySink {
    fn submit(&self, inquiry: Inquiry) -> Result<InquiryAck, CatalogError>;

    fn submit_quote(&self, request: QuickQuote) -> Result<QuoteAck, CatalogError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSink {
    log_contact: bool,
}

impl PlaceholderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow contact name and phone to appear in log output.
    #[must_use]
    pub fn with_contact_logging(mut self, enable: bool) -> Self {
        self.log_contact = enable;
        self
    }

    fn contact_value<'a>(&self, value: &'a str) -> &'a str {
        if self.log_contact {
            value
        } else {
            REDACTED_VALUE
        }
    }
}

impl InquirySink for PlaceholderSink {
    fn submit(&self, inquiry: Inquiry) -> Result<InquiryAck, CatalogError> {
        let span = info_span!("inquiry", company = %inquiry.company);
        let _guard = span.enter();
        inquiry.validate()?;
        info!(
            contact_name = %self.contact_value(&inquiry.contact_name),
            phone = %self.contact_value(&inquiry.phone),
            style = %inquiry.style,
            metal = %inquiry.metal,
            quantity = ?inquiry.quantity,
            "inquiry accepted by placeholder sink; not delivered"
        );
        Ok(InquiryAck {
            notice: PLACEHOLDER_NOTICE.to_string(),
            delivered: false,
            received_at: Utc::now(),
            inquiry,
        })
    }

    fn submit_quote(&self, request: QuickQuote) -> Result<QuoteAck, CatalogError> {
        let span = info_span!("quick_quote", sku = %request.sku, company = %request.company);
        let _guard = span.enter();
        request.validate()?;
        info!(
            phone = %self.contact_value(&request.phone),
            quantity = ?request.quantity,
            "quick quote accepted by placeholder sink; not delivered"
        );
        Ok(QuoteAck {
            notice: QUICK_QUOTE_NOTICE.to_string(),
            delivered: false,
            received_at: Utc::now(),
            request,
        })
    }
}
