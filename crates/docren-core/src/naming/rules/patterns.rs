//! Common regex patterns for OCR field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numeric date: 1-2 digit day, 1-2 digit month, 2 or 4 digit year,
    // with / or - separators.
    pub static ref DATE: Regex = Regex::new(
        r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}"
    ).unwrap();

    // Currency-labeled amount, label optional. Integer part with optional
    // comma/space thousands separators, mandatory 2-digit decimal part.
    pub static ref AMOUNT: Regex = Regex::new(
        r"(?i)(?:total|amount|s)?\s*[$€£]?\s*(\d{1,3}(?:[,\s]?\d{3})*)[.,](\d{2})\b"
    ).unwrap();

    // Labeled invoice number: 3-20 alphanumeric/hyphen characters.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)(?:invoice|inv|bill|statement)\s*[:#\s]*([a-zA-Z0-9-]{3,20})"
    ).unwrap();

    // Labeled reference/PO number, same token shape.
    pub static ref REFERENCE_NUMBER: Regex = Regex::new(
        r"(?i)(?:ref|reference|po)\s*[:#\s]*([a-zA-Z0-9-]{3,20})"
    ).unwrap();
}
