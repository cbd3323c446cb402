//! Deterministic filename composition from extraction results.

use chrono::{Local, NaiveDateTime};

use crate::models::config::NamingConfig;
use crate::models::result::ExtractionResult;

/// Keep only characters safe for filenames.
fn sanitize_part(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect()
}

/// Compose a filename from extraction results using the current clock.
///
/// See [`compose_at`] for the full contract; this wrapper is the only place
/// the composer touches the real clock.
pub fn compose(
    result: &ExtractionResult,
    extension: &str,
    prefix: &str,
    separator: &str,
    components: &[String],
    config: &NamingConfig,
) -> String {
    compose_at(
        result,
        extension,
        prefix,
        separator,
        components,
        config,
        Local::now().naive_local(),
    )
}

/// Compose a filename from extraction results at a fixed point in time.
///
/// Components are appended in the caller's order; a sanitized non-empty
/// `prefix` always comes first. Tokens that are unknown or resolve to
/// nothing contribute no part. `date` falls back to today (`YYYYMMDD`) and
/// `timestamp` is the current time (`HHMMSS`). If no parts were collected
/// at all, a synthetic `<YYYYMMDD><sep><marker>` name is produced. The
/// joined name passes a final filesystem-safety filter before the original
/// extension is appended verbatim.
///
/// Deterministic given a fixed `now`.
#[allow(clippy::too_many_arguments)]
pub fn compose_at(
    result: &ExtractionResult,
    extension: &str,
    prefix: &str,
    separator: &str,
    components: &[String],
    config: &NamingConfig,
    now: NaiveDateTime,
) -> String {
    let components: &[String] = if components.is_empty() {
        &config.default_components
    } else {
        components
    };

    let today = now.format("%Y%m%d").to_string();
    let mut parts: Vec<String> = Vec::new();

    if !prefix.is_empty() {
        let cleaned = sanitize_part(prefix);
        if !cleaned.is_empty() {
            parts.push(cleaned);
        }
    }

    for token in components {
        let value = match token.as_str() {
            "date" => Some(result.date.clone().unwrap_or_else(|| today.clone())),
            "vendor" => Some(if result.vendor.is_empty() {
                config.placeholder_vendor.clone()
            } else {
                result.vendor.clone()
            }),
            "amount" => result.amount.clone(),
            "invoice_number" => result.invoice_number.clone(),
            "reference_number" => result.reference_number.clone(),
            "custom_match" => result.custom_match.clone(),
            "targeted_label" => result.targeted_label.clone(),
            "timestamp" => Some(now.format("%H%M%S").to_string()),
            // Unknown tokens contribute nothing.
            _ => None,
        };

        if let Some(value) = value {
            if !value.is_empty() {
                parts.push(value);
            }
        }
    }

    if parts.is_empty() {
        parts.push(today);
        parts.push(config.empty_scan_marker.clone());
    }

    let core_name = parts.join(separator);
    // Safety net: per-part sanitization should leave nothing for this pass.
    let safe_name = sanitize_part(&core_name).replace(' ', "_");

    format!("{safe_name}{extension}")
}
