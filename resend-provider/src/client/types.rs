//! Resend wire types

use serde::Deserialize;

/// Error body returned by the API on non-2xx responses.
///
/// `{"statusCode": 404, "name": "not_found", "message": "Email not found"}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
