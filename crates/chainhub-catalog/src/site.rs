//! Static page content that is not catalog data.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteProfile {
    pub business_name: String,
    pub tagline: String,
    pub headline: String,
    pub contact_name: String,
    pub phone: String,
    pub whatsapp: String,
    /// Static asset path; not generated here.
    pub catalog_pdf: String,
    pub badges: Vec<String>,
    /// Shown in the SKU detail view.
    pub b2b_notes: Vec<String>,
    pub wholesale_includes: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub faq: Vec<FaqEntry>,
}

impl SiteProfile {
    /// `https://wa.me/<digits>` for the WhatsApp number.
    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", digits(&self.whatsapp))
    }

    /// `tel:+<digits>` for the phone number.
    pub fn call_link(&self) -> String {
        format!("tel:+{}", digits(&self.phone))
    }
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl Default for SiteProfile {
    fn default() -> Self {
        let process = [
            (
                "Send Requirements",
                "Style, metal, finish, thickness, length, quantity.",
            ),
            (
                "Confirm Quote",
                "We share wholesale quote + MOQ + dispatch timeline.",
            ),
            (
                "Ready Stock / Custom",
                "Ready dispatch or custom order as required.",
            ),
            ("Dispatch", "Secure packing + invoice + tracking shared."),
        ]
        .into_iter()
        .map(|(title, detail)| ProcessStep {
            title: title.to_string(),
            detail: detail.to_string(),
        })
        .collect();
        let faq = [
            (
                "Do you sell retail?",
                "No. We are B2B only and supply chains in wholesale quantities to shops, resellers, and distributors.",
            ),
            (
                "Do you sell only chains?",
                "Yes. Our entire focus is chains—fast-moving styles with consistent finishing and repeatable supply.",
            ),
            (
                "Can I order custom length / thickness?",
                "Yes. Custom length/thickness is possible based on MOQ and timeline. Share your requirement for a quote.",
            ),
            (
                "What about dispatch and invoice?",
                "We provide safe packing, dispatch support, GST invoice, and tracking details.",
            ),
        ]
        .into_iter()
        .map(|(question, answer)| FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect();
        Self {
            business_name: "Shri Sai Jwellers".to_string(),
            tagline: "B2B Wholesale • Chains Only".to_string(),
            headline: "Wholesale Chain Hub for Shops, Resellers & Distributors".to_string(),
            contact_name: "Ayush Soni".to_string(),
            phone: "+91 6306216958".to_string(),
            whatsapp: "+91 6306216958".to_string(),
            catalog_pdf: "/catalog.pdf".to_string(),
            badges: strings(&["No Retail Sales", "Chains Only", "Bulk Dispatch", "GST Invoice"]),
            b2b_notes: strings(&[
                "MOQ available for bulk orders",
                "Consistent supply + repeatable finish",
                "Custom length & thickness possible",
                "GST invoice + safe packing",
            ]),
            wholesale_includes: strings(&[
                "Bulk packing + safe dispatch",
                "Consistent finish for repeat sales",
                "Custom length/thickness (on demand)",
                "GST invoice + batch tracking",
            ]),
            process,
            faq,
        }
    }
}
