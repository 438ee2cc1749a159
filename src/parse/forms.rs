//! Form analysis.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::models::{FormInfo, FormPurpose};
use crate::parse::rules::{classify, FORM_PURPOSE_RULES};
use crate::utils::{element_text, parse_selector_unsafe};

const FORM_SELECTOR_STR: &str = "form";
const FIELD_SELECTOR_STR: &str = "input, select, textarea";
const EMAIL_FIELD_SELECTOR_STR: &str = "input[type='email']";

static FORM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(FORM_SELECTOR_STR, "FORM_SELECTOR"));
static FIELD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(FIELD_SELECTOR_STR, "FIELD_SELECTOR"));
static EMAIL_FIELD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(EMAIL_FIELD_SELECTOR_STR, "EMAIL_FIELD_SELECTOR"));

/// Describes every `<form>` in document order.
pub fn extract_forms(document: &Html) -> Vec<FormInfo> {
    document
        .select(&FORM_SELECTOR)
        .map(|form| FormInfo {
            fields_count: form.select(&FIELD_SELECTOR).count(),
            has_email_field: form.select(&EMAIL_FIELD_SELECTOR).next().is_some(),
            purpose: form_purpose(&form),
        })
        .collect()
}

/// Infers a form's purpose from its text and its fields' placeholders and values.
fn form_purpose(form: &ElementRef<'_>) -> FormPurpose {
    let mut text = element_text(form);
    for field in form.select(&FIELD_SELECTOR) {
        for attr in ["placeholder", "value"] {
            if let Some(value) = field.value().attr(attr) {
                text.push(' ');
                text.push_str(value);
            }
        }
    }
    classify(&text.to_lowercase(), FORM_PURPOSE_RULES).unwrap_or(FormPurpose::Unknown)
}
