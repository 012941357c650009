//! CLI error types

use resend_provider::ProviderError;
use thiserror::Error;

/// Invalid or missing settings, detected before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RESEND_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("RESEND_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

/// Every way a command can fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ProviderError),

    /// The call succeeded but carried nothing to show for a single entity.
    #[error("{0}")]
    EmptyPayload(&'static str),

    #[error("Failed to serialize output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Api(_) | Self::EmptyPayload(_) | Self::Render(_) | Self::Output(_) => 1,
        }
    }

    /// Line written to stderr.
    ///
    /// Empty payloads keep their own wording; everything else gets an
    /// `Error:` prefix.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::EmptyPayload(message) => (*message).to_string(),
            other => format!("Error: {other}"),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_exits_with_2() {
        let err = CliError::from(ConfigError::MissingApiKey);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.diagnostic(),
            "Error: RESEND_API_KEY environment variable is required"
        );
    }

    #[test]
    fn api_error_is_prefixed() {
        let err = CliError::from(ProviderError::NotFound {
            resource: "email".to_string(),
            id: "e_1".to_string(),
            raw_message: Some("Email not found".to_string()),
        });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.diagnostic(),
            "Error: email 'e_1' not found: Email not found"
        );
    }

    #[test]
    fn empty_payload_has_own_wording() {
        let err = CliError::EmptyPayload("No email data returned");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.diagnostic(), "No email data returned");
    }
}
