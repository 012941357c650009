//! Generic HTTP client tools
//!
//! Shared request processing for the client: sending, logging, reading the
//! body and decoding JSON. Requests are sent exactly once; nothing here retries.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Status, body and rate-limit hint of a completed HTTP exchange.
#[derive(Debug)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
    pub retry_after: Option<u64>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status and response text.
    ///
    /// Transport failures become [`ProviderError::Timeout`] or
    /// [`ProviderError::NetworkError`]; HTTP 429 becomes
    /// [`ProviderError::RateLimited`]. Every other status is returned to the
    /// caller for mapping.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<HttpResponse, ProviderError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        // Read before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                retry_after,
                raw_message: extract_message(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(HttpResponse {
            status,
            body,
            retry_after,
        })
    }

    /// Parse JSON response text.
    ///
    /// An empty or whitespace-only body decodes as JSON `null`.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let text = if response_text.trim().is_empty() {
            "null"
        } else {
            response_text
        };
        serde_json::from_str(text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ProviderError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

/// Best-effort extraction of the `message` field of an error body.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
}
