//! Vendor name derivation from the first OCR line.

/// Derive the vendor token from the first line of OCR text.
///
/// Keeps alphanumerics, spaces, and hyphens, trims, truncates to 20
/// characters, and turns internal spaces into underscores. A line that
/// sanitizes to nothing yields the placeholder, so the vendor is the one
/// field that is always populated.
pub fn derive_vendor(first_line: &str, placeholder: &str) -> String {
    let cleaned: String = first_line
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    let vendor: String = cleaned.trim().chars().take(20).collect::<String>().replace(' ', "_");
    if vendor.is_empty() {
        placeholder.to_string()
    } else {
        vendor
    }
}
