//! Structured metadata extracted from OCR text.

use serde::{Deserialize, Serialize};

/// Metadata extracted from one document's OCR text.
///
/// Every field except `vendor` is optional: a field that no pattern matched
/// stays `None`. Results are created fresh per extraction call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// First date found, separators normalized to `-`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Vendor name derived from the first line. Falls back to a placeholder
    /// token when the first line sanitizes to nothing, so it is always set.
    pub vendor: String,

    /// First monetary amount found, as a `USD-<amount>` token with thousands
    /// separators stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// First labeled invoice number, uppercased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// First labeled reference/PO number. Suppressed for the whole document
    /// once an invoice number has been found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,

    /// Match for the caller-supplied custom search term, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_match: Option<String>,

    /// Value captured after the caller-supplied label term, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targeted_label: Option<String>,
}

impl ExtractionResult {
    /// New result with only the vendor set.
    pub fn with_vendor(vendor: impl Into<String>) -> Self {
        Self {
            date: None,
            vendor: vendor.into(),
            amount: None,
            invoice_number: None,
            reference_number: None,
            custom_match: None,
            targeted_label: None,
        }
    }
}
