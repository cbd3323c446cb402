//! Configuration for filename composition.

use serde::{Deserialize, Serialize};

use crate::error::{DocrenError, Result};

/// Fallback constants used by the name composer.
///
/// These are passed explicitly into [`compose`](crate::compose) rather than
/// read from globals, so composition stays a pure function of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Vendor token used when the first OCR line yields nothing usable.
    pub placeholder_vendor: String,

    /// Marker appended to the synthetic fallback name when no name parts
    /// could be collected at all.
    pub empty_scan_marker: String,

    /// Separator placed between name parts when the caller supplies none.
    pub default_separator: String,

    /// Component list used when the caller supplies an empty one.
    pub default_components: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            placeholder_vendor: "OCR_Scan".to_string(),
            empty_scan_marker: "EMPTY_OCR".to_string(),
            default_separator: "_".to_string(),
            default_components: vec!["custom_match".to_string()],
        }
    }
}

impl NamingConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| DocrenError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| DocrenError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Parse a comma-separated component list into an ordered token list.
///
/// Tokens are trimmed and empties dropped; order is preserved exactly as
/// supplied.
pub fn parse_component_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(|c| c.to_string())
        .collect()
}

/// Prepend `custom_match` to the component list if it is not already there.
///
/// When a caller searches for a custom term, the match should show up in the
/// suggested name even if the caller forgot to list it.
pub fn promote_custom_match(components: &mut Vec<String>) {
    if !components.iter().any(|c| c == "custom_match") {
        components.insert(0, "custom_match".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_component_list() {
        assert_eq!(
            parse_component_list("date, vendor ,amount"),
            vec!["date", "vendor", "amount"]
        );
        assert_eq!(parse_component_list(" , ,"), Vec::<String>::new());
        assert_eq!(parse_component_list(""), Vec::<String>::new());
    }

    #[test]
    fn test_promote_custom_match() {
        let mut components = vec!["date".to_string(), "vendor".to_string()];
        promote_custom_match(&mut components);
        assert_eq!(components, vec!["custom_match", "date", "vendor"]);

        // Already present: list untouched
        promote_custom_match(&mut components);
        assert_eq!(components, vec!["custom_match", "date", "vendor"]);
    }

    #[test]
    fn test_default_config() {
        let config = NamingConfig::default();
        assert_eq!(config.placeholder_vendor, "OCR_Scan");
        assert_eq!(config.default_separator, "_");
        assert_eq!(config.default_components, vec!["custom_match"]);
    }
}
