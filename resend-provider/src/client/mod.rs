//! Resend HTTP client

mod api;
mod error;
mod http;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};

pub(crate) use types::ResendErrorBody;

pub const RESEND_API_BASE: &str = "https://api.resend.com";
/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// reqwest-backed [`ResendApi`](crate::ResendApi) implementation.
pub struct ResendClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl ResendClient {
    /// Creates a client against the public API with default timeouts.
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_options(
            api_key,
            RESEND_API_BASE.to_string(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn with_options(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .user_agent(concat!("resend-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &crate::utils::log_sanitizer::mask_secret(&self.api_key),
            )
            .finish_non_exhaustive()
    }
}
