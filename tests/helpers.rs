// Shared helpers for end-to-end tests against a local wiremock server.

use site_scout::{Config, SiteAnalyzer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config for local tests: no politeness delay, short timeouts.
pub fn test_config() -> Config {
    Config {
        delay_seconds: 0.0,
        timeout_seconds: 5,
        probe_timeout_seconds: 5,
        user_agent: "site_scout_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Analyzer backed by the real HTTP fetcher.
pub fn test_analyzer(config: Config) -> SiteAnalyzer {
    SiteAnalyzer::from_config(config).expect("test clients should build")
}

/// Serves `body` for GET `route`.
pub async fn serve_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

/// Answers HEAD `route` with `status`.
pub async fn serve_head(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
