use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ApiResponse, Attachment, Domain, ListEnvelope, ReceivedEmail};

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status code of the failed response.
    pub status: u16,
    /// Resend error name, e.g. `not_found`.
    pub code: Option<String>,
    /// Original error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information used while mapping an error (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Resource kind being requested (`email`, `attachment`, `domain`).
    pub resource: Option<&'static str>,
    /// Identifier being requested.
    pub id: Option<String>,
    /// Value of the `Retry-After` header, if any.
    pub retry_after: Option<u64>,
}

impl ErrorContext {
    pub fn resource(resource: &'static str, id: impl Into<String>) -> Self {
        Self {
            resource: Some(resource),
            id: Some(id.into()),
            retry_after: None,
        }
    }
}

/// Maps raw API errors to [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            status: Some(raw.status),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// The subset of the Resend API this workspace talks to.
///
/// Each method issues exactly one request.
#[async_trait]
pub trait ResendApi: Send + Sync {
    /// List received (inbound) emails, newest first.
    async fn list_received_emails(
        &self,
        limit: u32,
    ) -> Result<ApiResponse<ListEnvelope<ReceivedEmail>>>;

    /// Fetch a single received email.
    async fn get_received_email(&self, id: &str) -> Result<ApiResponse<ReceivedEmail>>;

    /// List the attachments of a received email.
    async fn list_attachments(&self, email_id: &str)
    -> Result<ApiResponse<ListEnvelope<Attachment>>>;

    /// Fetch metadata for a single attachment of a received email.
    async fn get_attachment(
        &self,
        email_id: &str,
        attachment_id: &str,
    ) -> Result<ApiResponse<Attachment>>;

    /// List domains registered with the account.
    async fn list_domains(&self) -> Result<ApiResponse<ListEnvelope<Domain>>>;

    /// Fetch a domain including its DNS records.
    async fn get_domain(&self, domain_id: &str) -> Result<ApiResponse<Domain>>;
}

impl std::fmt::Debug for dyn ResendApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("dyn ResendApi").finish_non_exhaustive()
    }
}
