//! Generic HTTP client tools
//!
//! Sending, logging and reading responses, shared by every request the
//! Linode client issues. Building the request (URL, auth header, body) and
//! interpreting non-2xx bodies stays with the caller.
//!
//! Nothing here retries: each call is attempted exactly once.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// Transport failures never reach the caller as a status code:
    /// * timeouts → `ProviderError::Timeout`
    /// * connect/IO failures, 502/503/504 → `ProviderError::NetworkError`
    /// * 429 → `ProviderError::RateLimited` (with `Retry-After` if present)
    ///
    /// Every other status, including 4xx, is returned for the caller to map.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body into `T`, mapping failures to
    /// `ProviderError::ParseError`.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Page {
            pages: u32,
        }
        let result: Result<Page, ProviderError> = HttpUtils::parse_json(r#"{"pages":3}"#, "test");
        assert!(
            matches!(&result, Ok(Page { pages: 3 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Page {
            pages: u32,
        }
        let result: Result<Page, ProviderError> = HttpUtils::parse_json("<html>", "test");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { provider, .. }) if provider == "test"),
            "unexpected parse result: {result:?}"
        );
    }

    #[tokio::test]
    async fn rate_limit_maps_to_rate_limited() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v4/domains");
                then.status(429)
                    .header("Retry-After", "12")
                    .body(r#"{"errors":[{"reason":"Too many requests"}]}"#);
            })
            .await;

        let url = server.url("/v4/domains");
        let result =
            HttpUtils::execute_request(reqwest::Client::new().get(&url), "test", "GET", &url).await;
        assert!(
            matches!(
                &result,
                Err(ProviderError::RateLimited {
                    retry_after: Some(12),
                    ..
                })
            ),
            "unexpected result: {result:?}"
        );
    }

    #[tokio::test]
    async fn gateway_errors_map_to_network_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v4/domains");
                then.status(503).body("upstream unavailable");
            })
            .await;

        let url = server.url("/v4/domains");
        let result =
            HttpUtils::execute_request(reqwest::Client::new().get(&url), "test", "GET", &url).await;
        assert!(
            matches!(&result, Err(ProviderError::NetworkError { detail, .. }) if detail.starts_with("HTTP 503")),
            "unexpected result: {result:?}"
        );
    }

    #[tokio::test]
    async fn client_errors_are_returned_to_caller() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/v4/domains/1/records/2");
                then.status(404)
                    .body(r#"{"errors":[{"reason":"Not found"}]}"#);
            })
            .await;

        let url = server.url("/v4/domains/1/records/2");
        let result =
            HttpUtils::execute_request(reqwest::Client::new().delete(&url), "test", "DELETE", &url)
                .await;
        assert!(result.is_ok(), "expected Ok(..), got {result:?}");
        let Ok((status, body)) = result else {
            return;
        };
        assert_eq!(status, 404);
        assert!(body.contains("Not found"));
    }
}
