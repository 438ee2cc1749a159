//! Shared helpers.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text normalization and truncation
//! - URL resolution and host comparison

mod selector;
mod text;
mod urls;

pub use selector::{parse_selector_unsafe, parse_selectors};
pub use text::{contains_any, element_text, push_unique, truncate_with_marker};
pub use urls::{host_of, origin_url, resolve_href};
