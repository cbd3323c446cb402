//! Core library for OCR-driven document renaming.
//!
//! This crate provides:
//! - Adaptive region planning (how much of a page to OCR for a field set)
//! - Heuristic field extraction from noisy OCR text (date, vendor, amounts,
//!   invoice/reference numbers, user-supplied search terms)
//! - Deterministic, filesystem-safe filename composition from partial
//!   extraction results
//!
//! OCR itself, image handling, and the transport layer are deliberately out
//! of scope; callers feed raw text in and get structured metadata and a
//! suggested filename back.

pub mod error;
pub mod models;
pub mod naming;
pub mod region;

pub use error::{DocrenError, Result};
pub use models::config::{parse_component_list, promote_custom_match, NamingConfig};
pub use models::result::ExtractionResult;
pub use naming::composer::{compose, compose_at};
pub use naming::scanner::{extract, LineScanner};
pub use region::{plan_region, FULL_SCAN};
