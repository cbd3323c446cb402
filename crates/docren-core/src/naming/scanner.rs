//! Line-oriented metadata extraction with an early-exit budget.

use tracing::debug;

use crate::models::result::ExtractionResult;
use crate::naming::rules::{
    derive_vendor, AmountRule, CustomTermRule, DateRule, InvoiceNumberRule, ReferenceNumberRule,
    TargetedLabelRule,
};
use crate::naming::LineRule;

/// Vendor token used when the first line yields nothing usable.
const PLACEHOLDER_VENDOR: &str = "OCR_Scan";

/// Heuristic field extractor over raw OCR text.
///
/// Scans the text line by line, applying a fixed battery of pattern
/// matchers. Each field locks at its first match and is never overwritten.
/// Scanning stops as soon as every field that further lines could still
/// change has been resolved, which bounds extraction cost on long OCR
/// output without altering any extracted value.
pub struct LineScanner {
    placeholder_vendor: String,
}

impl LineScanner {
    /// Create a scanner with the default vendor placeholder.
    pub fn new() -> Self {
        Self {
            placeholder_vendor: PLACEHOLDER_VENDOR.to_string(),
        }
    }

    /// Override the vendor placeholder token.
    pub fn with_placeholder_vendor(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_vendor = placeholder.into();
        self
    }

    /// Extract metadata from OCR text.
    ///
    /// `custom_term` and `label_term` are the caller's optional search and
    /// label terms; blank or unusable terms leave their fields `None` and
    /// never abort the extraction.
    pub fn extract(
        &self,
        text: &str,
        custom_term: Option<&str>,
        label_term: Option<&str>,
    ) -> ExtractionResult {
        // Vendor comes from the first line only, derived once.
        let first_line = text.lines().next().unwrap_or("");
        let mut result =
            ExtractionResult::with_vendor(derive_vendor(first_line, &self.placeholder_vendor));

        let custom_rule = custom_term.and_then(CustomTermRule::new);
        let label_rule = label_term.and_then(TargetedLabelRule::new);

        let mut scanned = 0usize;
        for line in text.lines() {
            scanned += 1;

            if result.date.is_none() {
                result.date = DateRule.apply(line);
            }
            if result.amount.is_none() {
                result.amount = AmountRule.apply(line);
            }
            if result.invoice_number.is_none() {
                if let Some(number) = InvoiceNumberRule.apply(line) {
                    // Invoice numbers take document-wide priority: finding
                    // one retires any reference number seen earlier.
                    result.invoice_number = Some(number);
                    result.reference_number = None;
                } else if result.reference_number.is_none() {
                    result.reference_number = ReferenceNumberRule.apply(line);
                }
            }
            if let Some(rule) = &custom_rule {
                if result.custom_match.is_none() {
                    result.custom_match = rule.apply(line);
                }
            }
            if let Some(rule) = &label_rule {
                if result.targeted_label.is_none() {
                    result.targeted_label = rule.apply(line);
                }
            }

            // Stop once no remaining line can change the result: every
            // lockable field is set (reference is retired by the invoice
            // number) and both optional terms, where requested, have hits.
            let custom_done = custom_rule.is_none() || result.custom_match.is_some();
            let label_done = label_rule.is_none() || result.targeted_label.is_some();
            if result.date.is_some()
                && result.amount.is_some()
                && result.invoice_number.is_some()
                && custom_done
                && label_done
            {
                debug!("extraction satisfied after {scanned} lines, stopping early");
                break;
            }
        }

        debug!(
            lines = scanned,
            date = result.date.is_some(),
            amount = result.amount.is_some(),
            "extraction finished"
        );
        result
    }
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract metadata from OCR text with default settings.
pub fn extract(
    text: &str,
    custom_term: Option<&str>,
    label_term: Option<&str>,
) -> ExtractionResult {
    LineScanner::new().extract(text, custom_term, label_term)
}
