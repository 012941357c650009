//! Shared helpers for live API tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;
use std::time::Duration;

use resend_provider::{ClientOptions, ResendApi, create_client};

/// Skips the test when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Asserts `Option` is `Some` and unwraps it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Asserts `Result` is `Ok` and unwraps it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Test context wrapping a live client.
pub struct TestContext {
    pub client: Arc<dyn ResendApi>,
}

impl TestContext {
    /// Builds a client from `RESEND_API_KEY` (and `RESEND_BASE_URL` if set).
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("RESEND_API_KEY").ok()?;
        let options = ClientOptions {
            api_key,
            base_url: env::var("RESEND_BASE_URL").ok(),
            timeout: Some(Duration::from_secs(30)),
        };
        let client = create_client(options).ok()?;
        Some(Self { client })
    }
}
