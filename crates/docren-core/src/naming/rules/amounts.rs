//! Monetary amount matching for OCR lines.

use super::patterns::AMOUNT;
use crate::naming::LineRule;

/// Prefix attached to every stored amount token.
const CURRENCY_PREFIX: &str = "USD";

/// Matches the first currency-labeled number on a line.
///
/// The label (`Total`, `Amount`, or an OCR-mangled `S`) and the currency
/// symbol are both optional; the 2-digit decimal part is mandatory.
/// Thousands separators are stripped and the value is stored as a
/// `USD-<amount>` token with a `.` decimal separator.
pub struct AmountRule;

impl LineRule for AmountRule {
    fn apply(&self, line: &str) -> Option<String> {
        let caps = AMOUNT.captures(line)?;
        let integer_part = caps[1].replace([',', ' '], "");
        Some(format!("{CURRENCY_PREFIX}-{integer_part}.{}", &caps[2]))
    }
}
