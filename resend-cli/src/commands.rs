//! Command handlers
//!
//! Each handler awaits exactly one API call and returns the text to print.
//! [`run_action`] is the only place that prints or picks an exit status.

use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use resend_provider::{ApiResponse, FromBody, ResendApi};

use crate::cli::{DomainCommand, EmailCommand, Leaf};
use crate::error::{CliError, CliResult};
use crate::render;

const NO_EMAIL_DATA: &str = "No email data returned";
const NO_ATTACHMENT_DATA: &str = "No attachment data returned";
const NO_DOMAIN_DATA: &str = "No domain data returned";

/// Awaits a command and reports its outcome.
///
/// Output goes to stdout only once the whole command has succeeded; errors
/// go to stderr.
pub async fn run_action<F>(action: F) -> ExitCode
where
    F: Future<Output = CliResult<String>>,
{
    let result = action.await;
    let code = report(
        result,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    ExitCode::from(code)
}

/// Writes a command outcome and returns the exit status.
///
/// A failed write of the success output is reported like any other error.
pub fn report(result: CliResult<String>, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let failure = match result {
        Ok(output) => match writeln!(out, "{output}").and_then(|()| out.flush()) {
            Ok(()) => return 0,
            Err(e) => CliError::Output(e),
        },
        Err(e) => e,
    };
    if let CliError::Api(api) = &failure {
        tracing::debug!("Command failed: {api:?}");
    }
    // Nowhere left to report a failed stderr write
    let _ = writeln!(err, "{}", failure.diagnostic());
    failure.exit_code()
}

/// Runs one leaf command against `client`.
pub async fn dispatch(client: &dyn ResendApi, leaf: Leaf) -> CliResult<String> {
    tracing::debug!("Dispatching {leaf:?}");
    match leaf {
        Leaf::Email(EmailCommand::List { json, limit }) => list_emails(client, limit, json).await,
        Leaf::Email(EmailCommand::Get { id, json }) => get_email(client, &id, json).await,
        Leaf::Email(EmailCommand::Attachments { email_id, json }) => {
            list_attachments(client, &email_id, json).await
        }
        Leaf::Email(EmailCommand::Attachment {
            email_id,
            attachment_id,
            json,
            output,
        }) => get_attachment(client, &email_id, &attachment_id, json, output.as_deref()).await,
        Leaf::Domain(DomainCommand::List { json }) => list_domains(client, json).await,
        Leaf::Domain(DomainCommand::Get { id, json }) => get_domain(client, &id, json).await,
    }
}

/// Decodes a payload that must be present.
///
/// JSON output never goes through here, so it re-emits bodies the typed
/// view cannot read.
fn require<T: FromBody>(response: &ApiResponse<T>, missing: &'static str) -> CliResult<T> {
    response.decode()?.ok_or(CliError::EmptyPayload(missing))
}

pub async fn list_emails(client: &dyn ResendApi, limit: u32, json: bool) -> CliResult<String> {
    let response = client.list_received_emails(limit).await?;
    if response.is_empty() {
        return Err(CliError::EmptyPayload(NO_EMAIL_DATA));
    }
    if json {
        return Ok(render::json_envelope(&response)?);
    }
    let list = require(&response, NO_EMAIL_DATA)?;
    Ok(render::email_list(&list))
}

pub async fn get_email(client: &dyn ResendApi, id: &str, json: bool) -> CliResult<String> {
    let response = client.get_received_email(id).await?;
    if response.is_empty() {
        return Err(CliError::EmptyPayload(NO_EMAIL_DATA));
    }
    if json {
        return Ok(render::json_envelope(&response)?);
    }
    let email = require(&response, NO_EMAIL_DATA)?;
    Ok(render::email_detail(&email))
}

pub async fn list_attachments(
    client: &dyn ResendApi,
    email_id: &str,
    json: bool,
) -> CliResult<String> {
    let response = client.list_attachments(email_id).await?;
    if json {
        return Ok(render::json_envelope(&response)?);
    }
    let attachments = response.decode()?.map(|l| l.data).unwrap_or_default();
    Ok(render::attachment_list(&attachments))
}

/// `output` takes precedence over `json`; the destination is never written.
pub async fn get_attachment(
    client: &dyn ResendApi,
    email_id: &str,
    attachment_id: &str,
    json: bool,
    output: Option<&Path>,
) -> CliResult<String> {
    let response = client.get_attachment(email_id, attachment_id).await?;
    if response.is_empty() {
        return Err(CliError::EmptyPayload(NO_ATTACHMENT_DATA));
    }
    if let Some(path) = output {
        let attachment = require(&response, NO_ATTACHMENT_DATA)?;
        let destination = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        return Ok(render::attachment_metadata(&attachment, &destination));
    }
    if json {
        return Ok(render::json_envelope(&response)?);
    }
    let attachment = require(&response, NO_ATTACHMENT_DATA)?;
    Ok(render::attachment_detail(&attachment))
}

pub async fn list_domains(client: &dyn ResendApi, json: bool) -> CliResult<String> {
    let response = client.list_domains().await?;
    if json {
        return Ok(render::json_envelope(&response)?);
    }
    let domains = response.decode()?.map(|l| l.data).unwrap_or_default();
    Ok(render::domain_list(&domains))
}

pub async fn get_domain(client: &dyn ResendApi, id: &str, json: bool) -> CliResult<String> {
    let response = client.get_domain(id).await?;
    if response.is_empty() {
        return Err(CliError::EmptyPayload(NO_DOMAIN_DATA));
    }
    if json {
        return Ok(render::json_envelope(&response)?);
    }
    let domain = require(&response, NO_DOMAIN_DATA)?;
    Ok(render::domain_detail(&domain))
}
