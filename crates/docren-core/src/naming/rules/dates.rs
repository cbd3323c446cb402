//! Date matching for OCR lines.

use super::patterns::DATE;
use crate::naming::LineRule;

/// Matches the first numeric day/month/year substring on a line and
/// normalizes its separators to `-`.
pub struct DateRule;

impl LineRule for DateRule {
    fn apply(&self, line: &str) -> Option<String> {
        DATE.find(line).map(|m| m.as_str().replace('/', "-"))
    }
}
