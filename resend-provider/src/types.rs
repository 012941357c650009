use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};

// ============ Response envelope ============

/// A successful API response.
///
/// Holds the JSON body exactly as it was received. The typed view is only
/// built on demand with [`decode`](Self::decode), so a body that drifts from
/// the typed schema can still be re-emitted unchanged.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    raw: Value,
    _payload: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    pub fn new(raw: Value) -> Self {
        Self {
            raw,
            _payload: PhantomData,
        }
    }

    /// The response body as received (`Value::Null` for an empty body).
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Whether the API returned no data at all.
    pub fn is_empty(&self) -> bool {
        self.raw.is_null()
    }

    /// The `{ data, error }` result envelope for a successful call.
    #[must_use]
    pub fn envelope(&self) -> Value {
        serde_json::json!({
            "data": self.raw,
            "error": null,
        })
    }
}

impl<T: FromBody> ApiResponse<T> {
    /// Decodes the typed payload, `None` when the API returned no data.
    pub fn decode(&self) -> Result<Option<T>> {
        T::from_body(&self.raw)
    }
}

/// Typed view of a response body.
pub trait FromBody: Sized {
    /// Returns `Ok(None)` for a `null` body.
    fn from_body(raw: &Value) -> Result<Option<Self>>;
}

/// Paginated list wrapper returned by list endpoints.
///
/// `has_more` only reports that another page exists; nothing here follows it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    /// Object marker, usually `"list"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default)]
    pub has_more: bool,
    pub data: Vec<T>,
}

impl<T: DeserializeOwned> ListEnvelope<T> {
    /// Normalizes a list body into an envelope.
    ///
    /// Accepts both `{ "object": "list", "data": [...] }` and a bare `[...]`.
    /// A body whose `data` is missing or not a sequence yields an empty list.
    /// Items that fail to decode are a parse error.
    pub fn from_value(raw: &Value) -> Result<Self> {
        match raw {
            Value::Array(_) => {
                let data = decode::<Vec<T>>(raw)?;
                Ok(Self {
                    object: None,
                    has_more: false,
                    data,
                })
            }
            Value::Object(map) if map.get("data").is_some_and(Value::is_array) => decode(raw),
            other => {
                log::warn!(
                    "List response has no data sequence, treating as empty: {}",
                    shape_of(other)
                );
                Ok(Self {
                    object: None,
                    has_more: false,
                    data: Vec::new(),
                })
            }
        }
    }
}

impl<T: DeserializeOwned> FromBody for ListEnvelope<T> {
    fn from_body(raw: &Value) -> Result<Option<Self>> {
        if raw.is_null() {
            return Ok(None);
        }
        Self::from_value(raw).map(Some)
    }
}

fn decode<T: DeserializeOwned>(raw: &Value) -> Result<T> {
    T::deserialize(raw).map_err(|e| {
        log::error!("Failed to decode response: {e}");
        ProviderError::ParseError {
            detail: e.to_string(),
        }
    })
}

fn decode_payload<T: DeserializeOwned>(raw: &Value) -> Result<Option<T>> {
    if raw.is_null() {
        return Ok(None);
    }
    decode(raw).map(Some)
}

macro_rules! impl_from_body {
    ($($ty:ty),+) => {
        $(
            impl FromBody for $ty {
                fn from_body(raw: &Value) -> Result<Option<Self>> {
                    decode_payload(raw)
                }
            }
        )+
    };
}

impl_from_body!(ReceivedEmail, Attachment, Domain);

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============ Received emails ============

/// Recipient field that the API sends either as a single address or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    /// Addresses joined with `", "`.
    pub fn joined(&self) -> String {
        match self {
            Self::One(addr) => addr.clone(),
            Self::Many(addrs) => addrs.join(", "),
        }
    }
}

impl Default for Recipients {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// An inbound email delivered to the account's receiving address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedEmail {
    pub id: String,
    pub from: String,
    #[serde(default)]
    pub to: Recipients,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub created_at: String,
}

// ============ Attachments ============

/// Attachment metadata. No binary content is carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_disposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    /// Short-lived URL for the attachment body, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

// ============ Domains ============

/// A DNS record the provider asks the domain owner to publish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Record purpose, e.g. `SPF`, `DKIM`, `MX`.
    pub record: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A sending/receiving domain registered with the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub status: String,
    pub region: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Only present on single-domain fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<DomainRecord>>,
}
