//! Client factory.

use std::sync::Arc;
use std::time::Duration;

use crate::client::{DEFAULT_REQUEST_TIMEOUT_SECS, RESEND_API_BASE, ResendClient};
use crate::error::Result;
use crate::traits::ResendApi;

/// Options used to build a client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_key: String,
    /// Overrides the public API base URL.
    pub base_url: Option<String>,
    /// Per-request timeout; defaults to 30 seconds.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
        }
    }
}

/// Creates a [`ResendApi`] instance from the given options.
///
/// The returned client is wrapped in `Arc<dyn ResendApi>` so it can be handed
/// to callers that only know the trait.
///
/// # Examples
///
/// ```rust,no_run
/// use resend_provider::{ClientOptions, create_client};
///
/// let client = create_client(ClientOptions::new("re_123")).unwrap();
/// ```
pub fn create_client(options: ClientOptions) -> Result<Arc<dyn ResendApi>> {
    let ClientOptions {
        api_key,
        base_url,
        timeout,
    } = options;

    let client = ResendClient::with_options(
        api_key,
        base_url.unwrap_or_else(|| RESEND_API_BASE.to_string()),
        timeout.unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
    )?;
    log::debug!("Created client for {}", client.base_url());
    Ok(Arc::new(client))
}
