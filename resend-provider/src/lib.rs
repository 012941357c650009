//! # resend-provider
//!
//! A typed async client for the received-email and domain endpoints of the
//! [Resend](https://resend.com/) API.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use resend_provider::{ClientOptions, ResendApi, create_client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_client(ClientOptions::new("re_123"))?;
//!
//!     let domains = client.list_domains().await?;
//!     for domain in domains.decode()?.map(|l| l.data).unwrap_or_default() {
//!         println!("{} ({})", domain.name, domain.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Responses
//!
//! Every operation returns an [`ApiResponse`] holding the JSON body exactly as
//! received. [`ApiResponse::decode`] builds the typed view on demand and yields
//! `None` when the API answered with an empty body. List endpoints accept both
//! the `{ "object": "list", "data": [...] }` envelope and a bare array.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: the API key was rejected
//! - [`ProviderError::NotFound`]: the email, attachment or domain does not exist
//! - [`ProviderError::RateLimited`]: HTTP 429
//! - [`ProviderError::NetworkError`]: connectivity issue
//!
//! Requests are sent once. Nothing is retried.

mod client;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{DEFAULT_REQUEST_TIMEOUT_SECS, RESEND_API_BASE, ResendClient};

pub use error::{ProviderError, Result};

pub use factory::{ClientOptions, create_client};

// Internal traits are not exported
pub use traits::ResendApi;

pub use types::{
    ApiResponse, Attachment, Domain, DomainRecord, FromBody, ListEnvelope, ReceivedEmail,
    Recipients,
};

pub use utils::log_sanitizer::mask_secret;
