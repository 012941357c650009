//! Live API integration tests
//!
//! Run with:
//! ```bash
//! RESEND_API_KEY=re_xxx \
//!     cargo test -p resend-provider --test resend_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use resend_provider::{ClientOptions, ProviderError, create_client};

#[tokio::test]
#[ignore = "integration test: requires RESEND_API_KEY"]
async fn test_list_domains() {
    skip_if_no_credentials!("RESEND_API_KEY");

    let ctx = require_some!(TestContext::from_env(), "failed to create test context");
    let response = require_ok!(ctx.client.list_domains().await, "list_domains failed");

    assert!(response.raw().is_object() || response.raw().is_array());
    let list = require_some!(require_ok!(response.decode(), "decode failed"));
    println!("list_domains passed, {} domain(s)", list.data.len());
}

#[tokio::test]
#[ignore = "integration test: requires RESEND_API_KEY"]
async fn test_get_first_domain() {
    skip_if_no_credentials!("RESEND_API_KEY");

    let ctx = require_some!(TestContext::from_env(), "failed to create test context");
    let list = require_ok!(ctx.client.list_domains().await, "list_domains failed");
    let domains = require_ok!(list.decode()).map(|l| l.data).unwrap_or_default();
    let Some(first) = domains.first() else {
        eprintln!("skipping test: account has no domains");
        return;
    };

    let response = require_ok!(ctx.client.get_domain(&first.id).await, "get_domain failed");
    let domain = require_some!(require_ok!(response.decode()));
    assert_eq!(domain.id, first.id);
    assert_eq!(domain.name, first.name);
}

#[tokio::test]
#[ignore = "integration test: requires RESEND_API_KEY"]
async fn test_list_received_emails_with_limit() {
    skip_if_no_credentials!("RESEND_API_KEY");

    let ctx = require_some!(TestContext::from_env(), "failed to create test context");
    let response = require_ok!(
        ctx.client.list_received_emails(2).await,
        "list_received_emails failed"
    );
    if let Some(list) = require_ok!(response.decode()) {
        assert!(list.data.len() <= 2);
    }
}

#[tokio::test]
#[ignore = "integration test: requires RESEND_API_KEY"]
async fn test_received_email_attachments() {
    skip_if_no_credentials!("RESEND_API_KEY");

    let ctx = require_some!(TestContext::from_env(), "failed to create test context");
    let list = require_ok!(ctx.client.list_received_emails(1).await);
    let emails = require_ok!(list.decode()).map(|l| l.data).unwrap_or_default();
    let Some(email) = emails.first() else {
        eprintln!("skipping test: no received emails");
        return;
    };

    let fetched = require_ok!(ctx.client.get_received_email(&email.id).await);
    assert_eq!(require_some!(require_ok!(fetched.decode())).id, email.id);

    let attachments = require_ok!(ctx.client.list_attachments(&email.id).await);
    let attachments = require_ok!(attachments.decode())
        .map(|l| l.data)
        .unwrap_or_default();
    let Some(attachment) = attachments.first() else {
        return;
    };
    let single = require_ok!(
        ctx.client
            .get_attachment(&email.id, &attachment.id)
            .await
    );
    assert_eq!(
        require_some!(require_ok!(single.decode())).filename,
        attachment.filename
    );
}

#[tokio::test]
#[ignore = "integration test: requires RESEND_API_KEY"]
async fn test_get_nonexistent_domain() {
    skip_if_no_credentials!("RESEND_API_KEY");

    let ctx = require_some!(TestContext::from_env(), "failed to create test context");
    let result = ctx
        .client
        .get_domain("00000000-0000-0000-0000-000000000000")
        .await;

    assert!(
        matches!(result, Err(ProviderError::NotFound { .. })),
        "expected NotFound, got {result:?}"
    );
}

#[tokio::test]
#[ignore = "integration test: requires network access"]
async fn test_invalid_api_key_is_rejected() {
    let client = require_ok!(create_client(ClientOptions::new("re_invalid_key")));
    let result = client.list_domains().await;

    assert!(
        matches!(result, Err(ProviderError::InvalidCredentials { .. })),
        "expected InvalidCredentials, got {result:?}"
    );
}
