//! HTTP client creation for the GitHub store

use reqwest::Client;
use std::time::Duration;

use crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST;

/// Creates a reqwest client with the configured timeout and a bounded
/// idle connection pool.
///
/// GitHub rejects requests without a `User-Agent`, so one is always set.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
