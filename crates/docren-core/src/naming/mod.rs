//! Field extraction and filename composition.

pub mod composer;
pub mod rules;
pub mod scanner;

pub use composer::{compose, compose_at};
pub use scanner::{extract, LineScanner};

/// A single-field matcher applied to one line of OCR text.
///
/// Rules are stateless and infallible: a line that does not contain the
/// field yields `None`. The scanner applies each rule until its field locks.
pub trait LineRule {
    /// Attempt to extract this rule's field from the line.
    fn apply(&self, line: &str) -> Option<String>;
}
