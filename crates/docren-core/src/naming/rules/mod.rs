//! Rule-based field matchers for OCR text lines.

pub mod amounts;
pub mod custom;
pub mod dates;
pub mod numbers;
pub mod patterns;
pub mod vendor;

pub use amounts::AmountRule;
pub use custom::{CustomTermRule, TargetedLabelRule};
pub use dates::DateRule;
pub use numbers::{InvoiceNumberRule, ReferenceNumberRule};
pub use vendor::derive_vendor;
