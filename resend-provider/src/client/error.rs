//! Resend error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::ResendClient;

/// Resend error name mapping
/// Reference: <https://resend.com/docs/api-reference/errors>
impl ProviderErrorMapper for ResendClient {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Authentication / authorization
            Some("missing_api_key" | "invalid_api_key" | "restricted_api_key") => {
                ProviderError::InvalidCredentials {
                    raw_message: Some(raw.message),
                }
            }

            Some("not_found") => not_found(raw, context),

            // Request validation
            Some(
                name @ ("validation_error"
                | "missing_required_field"
                | "invalid_parameter"
                | "invalid_idempotency_key"
                | "invalid_idempotent_request"
                | "invalid_region"
                | "invalid_from_address"
                | "invalid_access"
                | "method_not_allowed"),
            ) => ProviderError::InvalidParameter {
                name: name.to_string(),
                detail: raw.message,
            },

            Some("rate_limit_exceeded" | "daily_quota_exceeded" | "monthly_quota_exceeded") => {
                ProviderError::RateLimited {
                    retry_after: context.retry_after,
                    raw_message: Some(raw.message),
                }
            }

            Some("application_error" | "internal_server_error") => ProviderError::ServerError {
                status: raw.status,
                raw_message: Some(raw.message),
            },

            // Unnamed or unrecognized: fall back to the status code
            _ => match raw.status {
                401 | 403 => ProviderError::InvalidCredentials {
                    raw_message: Some(raw.message),
                },
                404 => not_found(raw, context),
                400 | 422 => ProviderError::InvalidParameter {
                    name: raw.code.unwrap_or_else(|| "invalid_request".to_string()),
                    detail: raw.message,
                },
                500..=599 => ProviderError::ServerError {
                    status: raw.status,
                    raw_message: Some(raw.message),
                },
                _ => self.unknown_error(raw),
            },
        }
    }
}

fn not_found(raw: RawApiError, context: ErrorContext) -> ProviderError {
    ProviderError::NotFound {
        resource: context.resource.unwrap_or("resource").to_string(),
        id: context.id.unwrap_or_else(|| "<unknown>".to_string()),
        raw_message: Some(raw.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ResendClient {
        ResendClient::new(String::new()).unwrap()
    }

    fn ctx() -> ErrorContext {
        ErrorContext::default()
    }

    // ---- Auth errors ----

    #[test]
    fn missing_api_key() {
        let err = client().map_error(
            RawApiError::with_code(401, "missing_api_key", "Missing API key"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn restricted_api_key() {
        let err = client().map_error(
            RawApiError::with_code(401, "restricted_api_key", "This key can only send"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn unnamed_403_is_credentials() {
        let err = client().map_error(RawApiError::new(403, "Forbidden"), ctx());
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    // ---- Not found ----

    #[test]
    fn not_found_carries_context() {
        let err = client().map_error(
            RawApiError::with_code(404, "not_found", "Domain not found"),
            ErrorContext::resource("domain", "d_1"),
        );
        match err {
            ProviderError::NotFound {
                resource,
                id,
                raw_message,
            } => {
                assert_eq!(resource, "domain");
                assert_eq!(id, "d_1");
                assert_eq!(raw_message.as_deref(), Some("Domain not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unnamed_404_is_not_found() {
        let err = client().map_error(
            RawApiError::new(404, "nope"),
            ErrorContext::resource("email", "e_1"),
        );
        assert!(matches!(err, ProviderError::NotFound { .. }));
    }

    // ---- Validation ----

    #[test]
    fn validation_error_keeps_name() {
        let err = client().map_error(
            RawApiError::with_code(422, "validation_error", "limit must be <= 100"),
            ctx(),
        );
        match err {
            ProviderError::InvalidParameter { name, detail } => {
                assert_eq!(name, "validation_error");
                assert_eq!(detail, "limit must be <= 100");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unnamed_400_is_invalid_parameter() {
        let err = client().map_error(RawApiError::new(400, "bad request"), ctx());
        assert!(matches!(err, ProviderError::InvalidParameter { .. }));
    }

    // ---- Rate limit / server ----

    #[test]
    fn daily_quota_is_rate_limited_with_hint() {
        let context = ErrorContext {
            retry_after: Some(5),
            ..ErrorContext::default()
        };
        let err = client().map_error(
            RawApiError::with_code(429, "daily_quota_exceeded", "quota"),
            context,
        );
        assert!(matches!(
            err,
            ProviderError::RateLimited {
                retry_after: Some(5),
                ..
            }
        ));
    }

    #[test]
    fn application_error_is_server_error() {
        let err = client().map_error(
            RawApiError::with_code(500, "application_error", "oops"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::ServerError { status: 500, .. }));
    }

    #[test]
    fn unnamed_502_is_server_error() {
        let err = client().map_error(RawApiError::new(502, "Bad Gateway"), ctx());
        assert!(matches!(err, ProviderError::ServerError { status: 502, .. }));
    }

    // ---- Fallback ----

    #[test]
    fn unknown_name_and_status() {
        let err = client().map_error(
            RawApiError::with_code(409, "concurrent_idempotent_requests", "busy"),
            ctx(),
        );
        match err {
            ProviderError::Unknown {
                status,
                raw_code,
                raw_message,
            } => {
                assert_eq!(status, Some(409));
                assert_eq!(raw_code.as_deref(), Some("concurrent_idempotent_requests"));
                assert_eq!(raw_message, "busy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
