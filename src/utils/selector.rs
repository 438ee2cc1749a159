//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Parses an ordered selector table, keeping each selector's position.
///
/// Selectors that fail to parse are logged and skipped rather than aborting the
/// whole table: one bad rule must not disable the rest of its category.
pub fn parse_selectors(selector_strs: &[&str], context: &str) -> Vec<Selector> {
    selector_strs
        .iter()
        .filter_map(|s| match Selector::parse(s) {
            Ok(selector) => Some(selector),
            Err(e) => {
                log::error!(
                    "Failed to parse CSS selector '{}' in {}: {}. Skipping it.",
                    s,
                    context,
                    e
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selectors_skips_invalid_entries() {
        let selectors = parse_selectors(&["nav", "[[[", ".menu"], "test table");
        assert_eq!(selectors.len(), 2);
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_parse_selector_unsafe_panics_on_invalid() {
        parse_selector_unsafe("[[[", "test");
    }
}
