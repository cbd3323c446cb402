//! Adaptive region planning.
//!
//! Decides how much of a document image (measured from the top edge) should
//! be rasterized and OCR'd, based on which metadata fields the caller wants.
//! Header-zone fields (vendor, date, numbers) only need the top of the page;
//! footer-zone fields (amounts) force a deep scan. Scanning less than the
//! full page keeps OCR cost down on documents where only header fields are
//! requested.

/// Scan percentage that covers the whole document.
///
/// Callers that pin the scan to this value bypass [`plan_region`] entirely;
/// the pin is an explicit override and must never be overwritten by the
/// heuristic.
pub const FULL_SCAN: u8 = 100;

/// Default scan percentage when no component gives a better hint.
const DEFAULT_SCAN: u8 = 50;

/// Safety margin added on top of the deepest field's typical depth.
const SCAN_MARGIN: u8 = 10;

/// Typical page depth (percent from the top) at which each field is found.
///
/// Flat immutable table; `timestamp` is listed for completeness even though
/// it is not document-derived.
const FIELD_DEPTHS: &[(&str, u8)] = &[
    ("vendor", 30),
    ("date", 35),
    ("invoice_number", 40),
    ("reference_number", 40),
    ("custom_match", 40),
    ("targeted_label", 50),
    ("amount", 80),
    ("timestamp", 100),
];

/// Compute the scan percentage for the given ordered component list.
///
/// Returns a value in `[30, 100]`: the deepest listed field's typical depth
/// plus a safety margin, clamped to 100. An empty list, or a list naming no
/// known field, yields the default of 50. Unknown tokens are ignored, not an
/// error, so forward-compatible token vocabularies pass through harmlessly.
///
/// Pure function: same input, same output, no I/O.
pub fn plan_region<S: AsRef<str>>(components: &[S]) -> u8 {
    let deepest = components
        .iter()
        .filter_map(|c| {
            let token = c.as_ref().trim();
            FIELD_DEPTHS
                .iter()
                .find(|(name, _)| *name == token)
                .map(|(_, depth)| *depth)
        })
        .max();

    match deepest {
        Some(depth) => depth.saturating_add(SCAN_MARGIN).min(FULL_SCAN),
        None => DEFAULT_SCAN,
    }
}
