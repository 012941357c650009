//! Resend HTTP request methods

use serde_json::Value;

use crate::error::Result;
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ResendClient, ResendErrorBody};

impl ResendClient {
    /// Performs a GET request and returns the JSON body as received.
    ///
    /// An empty body decodes as `Value::Null`.
    pub(crate) async fn get(&self, path: &str, context: ErrorContext) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);

        let request = self.client.get(&url).bearer_auth(&self.api_key);
        let response = HttpUtils::execute_request(request, "GET", &url).await?;

        if !response.is_success() {
            return Err(self.error_from_response(response, context));
        }

        HttpUtils::parse_json(&response.body)
    }

    fn error_from_response(
        &self,
        response: HttpResponse,
        mut context: ErrorContext,
    ) -> crate::ProviderError {
        let raw = match serde_json::from_str::<ResendErrorBody>(&response.body) {
            Ok(body) => {
                let message = body
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", response.status));
                let status = body.status_code.unwrap_or(response.status);
                match body.name {
                    Some(name) => RawApiError::with_code(status, name, message),
                    None => RawApiError::new(status, message),
                }
            }
            Err(_) => {
                let text = response.body.trim();
                let message = if text.is_empty() {
                    format!("HTTP {}", response.status)
                } else {
                    text.to_string()
                };
                RawApiError::new(response.status, message)
            }
        };

        context.retry_after = response.retry_after;
        let err = self.map_error(raw, context);
        if err.is_expected() {
            log::warn!("API error: {err}");
        } else {
            log::error!("API error: {err}");
        }
        err
    }
}
