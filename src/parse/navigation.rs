//! Navigation menu extraction.

use scraper::Html;

use crate::config::{MAX_NAV_ITEMS, MAX_NAV_TEXT_CHARS};
use crate::parse::rules::{ANCHOR_SELECTOR, NAV_SELECTORS};
use crate::utils::{element_text, push_unique};

/// Extracts the labels of the primary navigation menu.
///
/// The first element matching the navigation selector table is the menu; its link
/// texts are collected in document order, skipping empty and overlong labels and
/// duplicates, up to `MAX_NAV_ITEMS`.
pub fn extract_navigation(document: &Html) -> Vec<String> {
    let Some(menu) = NAV_SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).next())
    else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for anchor in menu.select(&ANCHOR_SELECTOR) {
        let text = element_text(&anchor);
        if text.is_empty() || text.chars().count() >= MAX_NAV_TEXT_CHARS {
            continue;
        }
        push_unique(&mut items, text);
        if items.len() >= MAX_NAV_ITEMS {
            break;
        }
    }
    items
}
