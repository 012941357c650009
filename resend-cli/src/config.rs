//! Settings read from the process environment

use std::sync::Arc;
use std::time::Duration;

use resend_provider::{ClientOptions, ResendApi, create_client};

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "RESEND_API_KEY";
pub const BASE_URL_VAR: &str = "RESEND_BASE_URL";
pub const TIMEOUT_VAR: &str = "RESEND_TIMEOUT_SECS";

/// Everything needed to build a client.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &resend_provider::mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_blank(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let base_url = non_blank(BASE_URL_VAR);
        let timeout = non_blank(TIMEOUT_VAR)
            .map(|raw| match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(ConfigError::InvalidTimeout(raw)),
            })
            .transpose()?;

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }

    /// Constructs the one client the process uses.
    pub fn build_client(&self) -> resend_provider::Result<Arc<dyn ResendApi>> {
        tracing::debug!(
            "Building client (key {}, base URL {:?})",
            resend_provider::mask_secret(&self.api_key),
            self.base_url
        );
        create_client(self.client_options())
    }
}
