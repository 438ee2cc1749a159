//! Text normalization helpers for extracted content.

use scraper::ElementRef;

/// Returns an element's text with whitespace runs collapsed to single spaces.
///
/// Markup routinely splits a label across lines and nested tags
/// (`<a>\n  Sign <b>up</b>\n</a>`); collapsing gives `"Sign up"`.
pub fn element_text(element: &ElementRef<'_>) -> String {
    let mut out = String::new();
    for chunk in element.text() {
        for word in chunk.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}

/// Truncates `text` to `max_chars` characters, appending `marker` when anything was cut.
pub fn truncate_with_marker(text: &str, max_chars: usize, marker: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], marker),
        None => text.to_string(),
    }
}

/// Pushes `value` unless it is already present. Returns whether it was added.
pub fn push_unique(values: &mut Vec<String>, value: String) -> bool {
    if values.contains(&value) {
        false
    } else {
        values.push(value);
        true
    }
}

/// Whether `haystack` contains any of `needles`.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
