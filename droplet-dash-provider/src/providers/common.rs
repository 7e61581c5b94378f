//! Shared helpers for provider implementations

use std::time::Duration;

use reqwest::Client;

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request
pub(crate) const USER_AGENT: &str = concat!("droplet-dash/", env!("CARGO_PKG_VERSION"));

/// Create an HTTP client with timeouts configured.
///
/// Falls back to a default client if the builder fails (e.g. the TLS backend
/// cannot be initialized), so construction itself never fails.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build configured HTTP client, using defaults: {e}");
            Client::new()
        })
}
