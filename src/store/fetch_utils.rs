//! Request sending with retry logic and response decoding

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::constants::retry::{BASE_DELAY_MS, MAX_ATTEMPTS, MAX_RETRY_AFTER_SECONDS};
use crate::error::AppError;

/// Sends a request, retrying transient failures with exponential backoff.
///
/// `build` is called once per attempt since a sent request cannot be reused.
/// Whatever [`AppError::is_retryable`] accepts is retried: 429 and 5xx
/// responses, timeouts and connection errors. A `Retry-After` header replaces
/// the backoff, capped at [`MAX_RETRY_AFTER_SECONDS`]. Any other response is
/// returned as-is, success or not, so callers decide what a 404 means.
pub(super) async fn send_with_retry<F>(build: F, url: &str) -> Result<Response, AppError>
where
    F: Fn() -> RequestBuilder,
{
    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(BASE_DELAY_MS);

    loop {
        let (failure, wait) = match build().send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() || attempt >= MAX_ATTEMPTS {
                    debug!("Response status: {status}");
                    return Ok(resp);
                }
                let reason = status.canonical_reason().unwrap_or("Unknown error");
                let failure = AppError::from_status(status.as_u16(), reason, url);
                if !failure.is_retryable() {
                    debug!("Response status: {status}");
                    return Ok(resp);
                }
                let wait = retry_after(resp.headers()).unwrap_or(backoff);
                (failure, wait)
            }
            Err(e) => {
                let failure = if e.is_timeout() {
                    AppError::network_timeout(url)
                } else if e.is_connect() {
                    AppError::network_connection(url, e.to_string())
                } else {
                    AppError::ApiFetch(e)
                };
                if !failure.is_retryable() || attempt >= MAX_ATTEMPTS {
                    error!("Request failed for URL {}: {}", url, failure);
                    return Err(failure);
                }
                (failure, backoff)
            }
        };

        warn!(
            "{}. Retrying in {:?} (attempt {}/{})",
            failure,
            wait,
            attempt + 1,
            MAX_ATTEMPTS
        );
        tokio::time::sleep(wait).await;
        attempt += 1;
        backoff = backoff.saturating_mul(2);
    }
}

/// The server's `Retry-After` in whole seconds, capped so a CLI run never stalls for long.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(|secs| Duration::from_secs(secs.min(MAX_RETRY_AFTER_SECONDS)))
}

/// Turns a non-success response into the matching `AppError`.
pub(super) fn ensure_success(response: Response, url: &str) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
    Err(AppError::from_status(status.as_u16(), reason, url))
}

/// Reads the body and deserializes it, telling apart bodies that are not
/// JSON at all from JSON of an unexpected shape.
pub(super) async fn read_json<T: DeserializeOwned>(
    response: Response,
    url: &str,
) -> Result<T, AppError> {
    let text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;
    debug!("Response length: {} bytes", text.len());
    parse_json(&text, url)
}

pub(super) fn parse_json<T: DeserializeOwned>(text: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(text).map_err(|e| {
        error!("Failed to parse response: {} (URL: {})", e, url);
        let trimmed = text.trim_start();
        if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::ApiParse(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use reqwest::Client;
    use reqwest::header::HeaderValue;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

    #[test]
    fn test_retry_after_is_capped() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("2"));
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(2)));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("3600"));
        assert_eq!(
            retry_after(&headers),
            Some(Duration::from_secs(MAX_RETRY_AFTER_SECONDS))
        );

        // HTTP-date form falls back to the backoff
        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2026 07:28:00 GMT"),
        );
        assert_eq!(retry_after(&headers), None);
    }

    #[tokio::test]
    async fn test_transient_status_is_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).insert_header("retry-after", "0"))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let url = mock_server.uri();
        let response = send_with_retry(|| client.get(&url), &url).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let url = mock_server.uri();
        let response = send_with_retry(|| client.get(&url), &url).await.unwrap();
        assert_eq!(response.status().as_u16(), 403);
    }

    #[test]
    fn test_parse_json_distinguishes_failures() {
        let players: Vec<Player> =
            parse_json(r#"[{"id":"1","name":"Erik Andersson"}]"#, "u").unwrap();
        assert_eq!(players.len(), 1);

        let not_json = parse_json::<Vec<Player>>("<html>404</html>", "u");
        assert!(matches!(not_json, Err(AppError::ApiMalformedJson { .. })));

        let wrong_shape = parse_json::<Vec<Player>>(r#"{"players":[]}"#, "u");
        assert!(matches!(wrong_shape, Err(AppError::ApiParse(_))));
    }
}
