//! HTTP client initialization.
//!
//! This module provides functions to initialize HTTP clients with proper
//! configuration for page fetches and reachability probes.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Page timeout from config (individual requests may override it)
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used for HEAD probes.
///
/// Redirects are disabled so a probe reports the status the candidate URL itself
/// answered with: a `301`/`302` from a bare domain is evidence the site exists even
/// when the redirect target is slow or unreachable.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.probe_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clients_build_with_default_config() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
        assert!(init_probe_client(&config).is_ok());
    }

    #[test]
    fn test_invalid_user_agent_is_rejected() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_err());
    }
}
