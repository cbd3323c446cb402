//! User-supplied search term and label matching.

use regex::Regex;
use tracing::warn;

use crate::naming::LineRule;

fn sanitize_id(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    cleaned.trim_end_matches('_').to_string()
}

/// Matches a caller-supplied search term.
///
/// Numeric terms are treated as ID prefixes: the term followed by one or
/// more digits/hyphens, longest occurrence on the line wins. Non-numeric
/// terms match any alphanumeric/hyphen run containing the term
/// case-insensitively.
pub struct CustomTermRule {
    regex: Regex,
    numeric: bool,
}

impl CustomTermRule {
    /// Build a rule for the given term. Returns `None` for a blank term or
    /// one the regex engine rejects; a bad term never aborts extraction.
    pub fn new(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        let numeric = term.chars().all(|c| c.is_ascii_digit());
        let pattern = if numeric {
            format!(r"{}[\d-]+", regex::escape(term))
        } else {
            format!(r"(?i)[a-zA-Z0-9-]*{}[a-zA-Z0-9-]*", regex::escape(term))
        };

        match Regex::new(&pattern) {
            Ok(regex) => Some(Self { regex, numeric }),
            Err(e) => {
                warn!("custom search term rejected: {e}");
                None
            }
        }
    }
}

impl LineRule for CustomTermRule {
    fn apply(&self, line: &str) -> Option<String> {
        let raw = if self.numeric {
            // Longest occurrence wins; first one on a tie.
            let mut best: Option<&str> = None;
            for m in self.regex.find_iter(line) {
                if best.map_or(true, |b| m.as_str().len() > b.len()) {
                    best = Some(m.as_str());
                }
            }
            best.map(str::to_string)
        } else {
            self.regex.find(line).map(|m| m.as_str().trim().to_string())
        }?;

        let cleaned = sanitize_id(&raw);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

/// Captures the remainder of a line after a caller-supplied label term.
///
/// The captured value is reduced to alphanumeric characters; a capture that
/// sanitizes to nothing does not count as found.
pub struct TargetedLabelRule {
    regex: Regex,
}

impl TargetedLabelRule {
    /// Build a rule for the given label term; `None` for blank or rejected
    /// terms, mirroring [`CustomTermRule::new`].
    pub fn new(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        match Regex::new(&format!(r"(?i){}\s+(.+)", regex::escape(term))) {
            Ok(regex) => Some(Self { regex }),
            Err(e) => {
                warn!("targeted label term rejected: {e}");
                None
            }
        }
    }
}

impl LineRule for TargetedLabelRule {
    fn apply(&self, line: &str) -> Option<String> {
        let caps = self.regex.captures(line)?;
        let cleaned: String = caps[1]
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric_term_extends_through_digits_and_hyphens() {
        let rule = CustomTermRule::new("12345").unwrap();
        assert_eq!(
            rule.apply("REF 12345-6789 extra"),
            Some("12345-6789".to_string())
        );
    }

    #[test]
    fn test_numeric_term_longest_match_wins() {
        let rule = CustomTermRule::new("42").unwrap();
        assert_eq!(
            rule.apply("ids 421 and 42-1000-17"),
            Some("42-1000-17".to_string())
        );
    }

    #[test]
    fn test_numeric_term_requires_continuation() {
        let rule = CustomTermRule::new("12345").unwrap();
        assert_eq!(rule.apply("order 12345 done"), None);
    }

    #[test]
    fn test_text_term_expands_to_surrounding_run() {
        let rule = CustomTermRule::new("acme").unwrap();
        assert_eq!(
            rule.apply("billed by ACME-WEST today"),
            Some("ACME-WEST".to_string())
        );
    }

    #[test]
    fn test_text_term_case_insensitive() {
        let rule = CustomTermRule::new("ProJ").unwrap();
        assert_eq!(rule.apply("see proj44 notes"), Some("proj44".to_string()));
    }

    #[test]
    fn test_blank_term_rejected() {
        assert!(CustomTermRule::new("   ").is_none());
    }

    #[test]
    fn test_label_captures_rest_of_line() {
        let rule = TargetedLabelRule::new("Account").unwrap();
        assert_eq!(
            rule.apply("Account 77-210 (primary)"),
            Some("77210primary".to_string())
        );
    }

    #[test]
    fn test_label_empty_capture_not_found() {
        let rule = TargetedLabelRule::new("Account").unwrap();
        assert_eq!(rule.apply("Account ---"), None);
    }

    #[test]
    fn test_label_absent() {
        let rule = TargetedLabelRule::new("Account").unwrap();
        assert_eq!(rule.apply("no such label here"), None);
    }
}
