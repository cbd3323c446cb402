//! Invoice and reference number matching for OCR lines.

use super::patterns::{INVOICE_NUMBER, REFERENCE_NUMBER};
use crate::naming::LineRule;

fn normalize_number(raw: &str) -> String {
    raw.trim().to_uppercase().replace(' ', "_")
}

/// Matches a labeled invoice number (`invoice`, `inv`, `bill`, `statement`)
/// and normalizes it to uppercase.
pub struct InvoiceNumberRule;

impl LineRule for InvoiceNumberRule {
    fn apply(&self, line: &str) -> Option<String> {
        INVOICE_NUMBER
            .captures(line)
            .map(|caps| normalize_number(&caps[1]))
    }
}

/// Matches a labeled reference/PO number (`ref`, `reference`, `po`).
///
/// The scanner only consults this rule while no invoice number has been
/// found anywhere in the document; invoice numbers take permanent priority.
pub struct ReferenceNumberRule;

impl LineRule for ReferenceNumberRule {
    fn apply(&self, line: &str) -> Option<String> {
        REFERENCE_NUMBER
            .captures(line)
            .map(|caps| normalize_number(&caps[1]))
    }
}
