// Parse module tests.

use super::*;
use crate::models::{CtaCategory, FormPurpose};
use scraper::Html;

const PAGE_URL: &str = "https://www.acme.com/";

fn base() -> Url {
    Url::parse(PAGE_URL).unwrap()
}

#[test]
fn test_extract_title_with_whitespace() {
    let html = "<html><head><title>\n   Acme   Rockets\n</title></head></html>";
    let document = Html::parse_document(html);
    assert_eq!(extract_title(&document), "Acme Rockets");
}

#[test]
fn test_missing_description_is_empty_string() {
    let html = "<html><head><title>Acme</title></head><body><h1>Hi</h1></body></html>";
    let features = extract_page(PAGE_URL, html);
    assert_eq!(features.description, "");
    assert_eq!(features.title, "Acme");
    assert!(features.is_ok());
}

#[test]
fn test_meta_description_and_keywords() {
    let html = r#"<head>
        <meta name="description" content="  Rockets for everyone.  ">
        <meta name="keywords" content="rockets, , launch ,space">
    </head>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_meta_description(&document), "Rockets for everyone.");
    assert_eq!(
        extract_meta_keywords(&document),
        vec!["rockets", "launch", "space"]
    );
}

#[test]
fn test_headings_in_document_order() {
    let html = "<h2>Second level</h2><h1>Top</h1><h4>Ignored</h4><h3> Third </h3><h2></h2>";
    let document = Html::parse_document(html);
    let headings = extract_headings(&document);
    let summary: Vec<(u8, &str)> = headings
        .iter()
        .map(|h| (h.level, h.text.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![(2, "Second level"), (1, "Top"), (3, "Third")]
    );
}

#[test]
fn test_navigation_caps_at_ten_in_first_seen_order() {
    let anchors: String = (1..=15)
        .map(|i| format!("<a href=\"/p{i}\">Item {i}</a>"))
        .collect();
    let html = format!("<nav>{anchors}</nav>");
    let document = Html::parse_document(&html);

    let items = extract_navigation(&document);

    let expected: Vec<String> = (1..=10).map(|i| format!("Item {i}")).collect();
    assert_eq!(items, expected);
    assert!(items.iter().all(|item| item.chars().count() < 50));
}

#[test]
fn test_navigation_skips_long_and_duplicate_labels() {
    let long_label = "x".repeat(60);
    let html = format!(
        r#"<div class="menu"><a href="/a">Docs</a><a href="/b">{long_label}</a><a href="/c">Docs</a><a href="/d"> </a><a href="/e">Blog</a></div>"#
    );
    let document = Html::parse_document(&html);
    assert_eq!(extract_navigation(&document), vec!["Docs", "Blog"]);
}

#[test]
fn test_navigation_uses_first_matching_selector_only() {
    let html = r#"<div class="menu"><a href="/m">Menu link</a></div><nav><a href="/n">Nav link</a></nav>"#;
    let document = Html::parse_document(html);
    assert_eq!(extract_navigation(&document), vec!["Nav link"]);
}

#[test]
fn test_navigation_missing_is_empty() {
    let document = Html::parse_document("<body><a href='/x'>Loose</a></body>");
    assert!(extract_navigation(&document).is_empty());
}

#[test]
fn test_cta_categories_follow_priority() {
    assert_eq!(categorize_cta("Sign up for a free trial"), CtaCategory::Signup);
    assert_eq!(categorize_cta("Request a Demo"), CtaCategory::Trial);
    assert_eq!(categorize_cta("Contact sales"), CtaCategory::Contact);
    assert_eq!(categorize_cta("See pricing"), CtaCategory::Pricing);
    assert_eq!(categorize_cta("Learn more"), CtaCategory::Other);
}

#[test]
fn test_ctas_resolve_urls_and_dedupe_elements() {
    let html = r#"
        <a class="btn cta" href="/signup">Get started</a>
        <button class="button">Contact us</button>
        <a href="https://app.acme.com/trial?plan=pro">Try it</a>
    "#;
    let document = Html::parse_document(html);
    let ctas = extract_calls_to_action(&document, Some(&base()));

    assert_eq!(ctas.len(), 3);
    assert_eq!(ctas[0].text, "Get started");
    assert_eq!(
        ctas[0].url.as_deref(),
        Some("https://www.acme.com/signup")
    );
    assert_eq!(ctas[0].category, CtaCategory::Other);
    assert_eq!(ctas[1].url, None);
    assert_eq!(ctas[1].category, CtaCategory::Contact);
    assert_eq!(ctas[2].category, CtaCategory::Trial);
}

#[test]
fn test_ctas_capped_and_long_text_discarded() {
    let long_text = "y".repeat(120);
    let mut html = format!("<a class='btn' href='/long'>{long_text}</a>");
    for i in 0..15 {
        html.push_str(&format!("<a class='btn' href='/b{i}'>Button {i}</a>"));
    }
    let document = Html::parse_document(&html);
    let ctas = extract_calls_to_action(&document, Some(&base()));

    assert_eq!(ctas.len(), 10);
    assert!(ctas.iter().all(|cta| cta.text.starts_with("Button")));
}

#[test]
fn test_social_links_first_platform_wins_and_dedupes() {
    let html = r#"
        <a href="https://twitter.com/acme">Twitter</a>
        <a href="https://twitter.com/acme">Twitter again</a>
        <a href="https://www.linkedin.com/company/acme">LinkedIn</a>
        <a href="//github.com/acme">GitHub</a>
        <a href="https://example.com">Elsewhere</a>
    "#;
    let document = Html::parse_document(html);
    let links = extract_social_links(&document, Some(&base()));

    let platforms: Vec<&str> = links.iter().map(|l| l.platform.as_str()).collect();
    assert_eq!(platforms, vec!["Twitter", "LinkedIn", "GitHub"]);
    assert_eq!(links[2].url, "https://github.com/acme");
}

#[test]
fn test_scheme_less_social_href_points_at_platform() {
    let html = r#"
        <a href="twitter.com/acme">Twitter</a>
        <a href="www.linkedin.com/company/acme">LinkedIn</a>
        <a href="/out?to=facebook.com/acme">Facebook</a>
    "#;
    let document = Html::parse_document(html);
    let links = extract_social_links(&document, Some(&base()));

    let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://twitter.com/acme",
            "https://www.linkedin.com/company/acme",
            "https://www.acme.com/out?to=facebook.com/acme",
        ]
    );
}

#[test]
fn test_contact_info_dedupes_caps_and_ignores_scripts() {
    let emails: String = (1..=7)
        .map(|i| format!("<p>mail{i}@acme.com</p>"))
        .collect();
    let html = format!(
        r#"<body>
            <script>var owner = "hidden@tracker.io";</script>
            <p>sales@acme.com</p><p>sales@acme.com</p>{emails}
            <p>Call +1 555 123 4567 or +44 1632 960 0983</p>
            <a href="/company/contact-us">Reach us</a>
        </body>"#
    );
    let document = Html::parse_document(&html);
    let text = page_text(&document);
    let contact = extract_contact_info(&document, &text, Some(&base()));

    assert_eq!(contact.emails.len(), 5);
    assert_eq!(contact.emails[0], "sales@acme.com");
    assert!(!contact.emails.iter().any(|e| e.contains("tracker")));
    assert_eq!(contact.phones, vec!["+1 555 123 4567", "+44 1632 960 0983"]);
    assert_eq!(
        contact.contact_page.as_deref(),
        Some("https://www.acme.com/company/contact-us")
    );
}

#[test]
fn test_phones_capped_at_three_in_order() {
    let html = r#"<body><ul>
        <li>+1 555 123 4567</li>
        <li>+44 1632 960 0983</li>
        <li>+49 3012 345 678</li>
        <li>+33 1234 567 890</li>
    </ul></body>"#;
    let document = Html::parse_document(html);
    let text = page_text(&document);
    let contact = extract_contact_info(&document, &text, Some(&base()));
    assert_eq!(
        contact.phones,
        vec!["+1 555 123 4567", "+44 1632 960 0983", "+49 3012 345 678"]
    );
}

#[test]
fn test_contact_page_found_by_link_text() {
    let html = r#"<a href="mailto:contact@acme.com">contact</a><a href="/talk">Contact</a>"#;
    let document = Html::parse_document(html);
    let contact = extract_contact_info(&document, "", Some(&base()));
    assert_eq!(
        contact.contact_page.as_deref(),
        Some("https://www.acme.com/talk")
    );
}

#[test]
fn test_value_propositions_length_window() {
    let html = format!(
        "<h1>Short</h1><h2>Launch rockets without the paperwork</h2><h3>{}</h3>",
        "z".repeat(201)
    );
    let features = extract_page(PAGE_URL, &html);
    assert_eq!(
        features.value_propositions,
        vec!["Launch rockets without the paperwork"]
    );
}

#[test]
fn test_testimonials_truncated_and_capped() {
    let long_quote = "a".repeat(250);
    let mut html = format!("<div class='testimonial'>{long_quote}</div>");
    for i in 0..9 {
        html.push_str(&format!(
            "<blockquote class='quote'>Customer {i} says this product is great</blockquote>"
        ));
    }
    let document = Html::parse_document(&html);
    let testimonials = extract_testimonials(&document);

    assert_eq!(testimonials.len(), 3);
    assert_eq!(testimonials[0].text, format!("{}...", "a".repeat(200)));
    assert_eq!(testimonials[0].text.chars().count(), 203);
    assert!(testimonials.iter().all(|t| t.author == "Unknown"));
}

#[test]
fn test_testimonials_skip_short_and_nested_matches() {
    let html = r#"
        <div class="review">Too short</div>
        <div class="testimonial"><p class="quote">The launch went perfectly, highly recommended.</p></div>
    "#;
    let document = Html::parse_document(html);
    let testimonials = extract_testimonials(&document);
    assert_eq!(testimonials.len(), 1);
    assert_eq!(
        testimonials[0].text,
        "The launch went perfectly, highly recommended."
    );
}

#[test]
fn test_pricing_mentioned_is_case_insensitive() {
    let with_pricing = extract_page(PAGE_URL, "<p>See our PRICING page</p>");
    assert!(with_pricing.pricing_mentioned);
    let with_symbol = extract_page(PAGE_URL, "<p>Only €9</p>");
    assert!(with_symbol.pricing_mentioned);
    let without = extract_page(PAGE_URL, "<p>Rockets for everyone</p>");
    assert!(!without.pricing_mentioned);
}

#[test]
fn test_pricing_plans_require_price() {
    let html = r#"
        <div class="pricing-plan">
            <h3>Starter</h3><span class="price">$10/mo</span>
            <ul><li>1 rocket</li><li>Email support</li></ul>
        </div>
        <div class="plan"><h3>Enterprise</h3><p>Talk to us</p></div>
    "#;
    let document = Html::parse_document(html);
    let plans = extract_pricing_plans(&document);
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "Starter");
    assert_eq!(plans[0].price, "$10/mo");
    assert_eq!(plans[0].features, vec!["1 rocket", "Email support"]);
}

#[test]
fn test_pricing_plans_capped_at_five() {
    let cards: String = (1..=7)
        .map(|i| {
            format!(r#"<div class="plan"><h3>Tier {i}</h3><span class="price">${i}0</span></div>"#)
        })
        .collect();
    let document = Html::parse_document(&cards);
    let plans = extract_pricing_plans(&document);
    let names: Vec<&str> = plans.iter().map(|plan| plan.name.as_str()).collect();
    assert_eq!(names, vec!["Tier 1", "Tier 2", "Tier 3", "Tier 4", "Tier 5"]);
    assert_eq!(plans[4].price, "$50");
}

#[test]
fn test_technologies_from_scripts_and_markers() {
    let html = r#"<head>
        <meta name="generator" content="WordPress 6.4">
        <script src="https://cdn.example.com/react-dom.min.js"></script>
        <script src="/js/jquery-3.7.js"></script>
        <script src="/js/react.production.js"></script>
        <script>gtag('config', 'G-XXXX');</script>
    </head>"#;
    let document = Html::parse_document(html);
    let technologies = detect_technologies(&document, html);
    let names: Vec<&str> = technologies.iter().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["Google Analytics", "React", "WordPress 6.4", "jQuery"]
    );
}

#[test]
fn test_forms_fields_and_purpose() {
    let html = r#"
        <form><input type="email" placeholder="you@example.com"><input type="submit" value="Subscribe"></form>
        <form><label>Contact us</label><input name="name"><textarea></textarea><select></select></form>
        <form><input name="user"><input type="password"><button>Sign in</button></form>
        <form><input name="q"></form>
    "#;
    let document = Html::parse_document(html);
    let forms = extract_forms(&document);

    assert_eq!(forms.len(), 4);
    assert_eq!(forms[0].purpose, FormPurpose::Newsletter);
    assert!(forms[0].has_email_field);
    assert_eq!(forms[0].fields_count, 2);
    assert_eq!(forms[1].purpose, FormPurpose::Contact);
    assert_eq!(forms[1].fields_count, 3);
    assert!(!forms[1].has_email_field);
    assert_eq!(forms[2].purpose, FormPurpose::Login);
    assert_eq!(forms[3].purpose, FormPurpose::Unknown);
}

#[test]
fn test_link_classification() {
    let html = r#"
        <a href="/about">About</a>
        <a href="pricing">Pricing</a>
        <a href="https://WWW.ACME.com/blog">Blog</a>
        <a href="https://docs.acme.com/">Docs</a>
        <a href="//cdn.other.net/file">CDN</a>
        <a href="mailto:hi@acme.com">Mail</a>
        <a href="tel:+15551234567">Call</a>
        <a name="anchor-only">No href</a>
    "#;
    let document = Html::parse_document(html);
    let stats = analyze_links(&document, Some(&base()), Some(&base()));
    assert_eq!(stats.internal, 3);
    assert_eq!(stats.external, 2);
    assert_eq!(stats.total, 7);
}

#[test]
fn test_links_to_page_host_stay_internal_under_cross_host_base() {
    let html = r#"<head><base href="https://static.cdn-acme.net/"></head>
        <a href="https://www.acme.com/pricing">Pricing</a>
        <a href="https://www.acme.com/about">About</a>
        <a href="https://other.org/">Other</a>
        <a href="assets/brochure.pdf">Brochure</a>"#;
    let features = extract_page(PAGE_URL, html);
    assert_eq!(features.links.internal, 2);
    assert_eq!(features.links.external, 2);
    assert_eq!(features.links.total, 4);
}

#[test]
fn test_base_href_overrides_page_url() {
    let html = r#"<head><base href="https://static.acme.com/en/"></head><a class="btn" href="start">Start</a>"#;
    let features = extract_page(PAGE_URL, html);
    assert_eq!(
        features.calls_to_action[0].url.as_deref(),
        Some("https://static.acme.com/en/start")
    );
}

#[test]
fn test_mobile_friendly_and_images() {
    let html = r#"<head><meta name="viewport" content="width=device-width"></head><img src="a.png"><img src="b.png">"#;
    let document = Html::parse_document(html);
    assert!(is_mobile_friendly(&document));
    assert_eq!(count_images(&document), 2);
    assert!(!is_mobile_friendly(&Html::parse_document("<p>viewport</p>")));
}

#[test]
fn test_empty_and_malformed_documents_do_not_fail() {
    let empty = extract_page(PAGE_URL, "");
    assert_eq!(empty.url, PAGE_URL);
    assert!(empty.title.is_empty());
    assert!(empty.headings.is_empty());
    assert_eq!(empty.links.total, 0);

    let malformed = extract_page(
        PAGE_URL,
        "<html><body><nav><a href='/x'>One<a href='/y'>Two</nav><div class='btn'>Go",
    );
    assert_eq!(malformed.navigation.len(), 2);
    assert_eq!(malformed.calls_to_action.len(), 1);
}

#[test]
fn test_unparseable_page_url_keeps_absolute_links() {
    let html = r#"<a href="/relative">R</a><a href="https://twitter.com/acme">T</a>"#;
    let features = extract_page("not a url", html);
    assert_eq!(features.links.total, 2);
    assert_eq!(features.links.internal, 0);
    assert_eq!(features.links.external, 1);
    assert_eq!(features.social_links.len(), 1);
}
