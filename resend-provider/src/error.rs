/// Unified error type for all Resend API operations.
///
/// The client never retries; transient variants ([`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout), [`RateLimited`](Self::RateLimited),
/// [`ServerError`](Self::ServerError)) are surfaced to the caller as-is.
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API key is missing, invalid, or not allowed to perform the request.
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested resource does not exist.
    NotFound {
        /// Kind of resource that was requested (`email`, `attachment`, `domain`).
        resource: String,
        /// Identifier that was requested.
        id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected by the API.
    InvalidParameter {
        /// Resend error name (e.g. `validation_error`).
        name: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The API rate limit or daily quota has been exceeded (HTTP 429).
    RateLimited {
        /// Suggested wait time in seconds, if the API sent `Retry-After`.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API answered with a 5xx status.
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    Unknown {
        /// HTTP status code, if the error came from a response.
        status: Option<u16>,
        /// Raw error name from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the error is an expected outcome (bad input, missing resource),
    /// used to pick the log level.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::NotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid API key: {msg}")
                } else {
                    write!(f, "Invalid API key")
                }
            }
            Self::NotFound {
                resource,
                id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "{resource} '{id}' not found: {msg}")
                } else {
                    write!(f, "{resource} '{id}' not found")
                }
            }
            Self::InvalidParameter { name, detail } => write!(f, "{detail} ({name})"),
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::ServerError {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Server error (HTTP {status}): {msg}")
                } else {
                    write!(f, "Server error (HTTP {status})")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::Unknown { raw_message, .. } => write!(f, "{raw_message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
