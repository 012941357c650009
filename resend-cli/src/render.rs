//! Output rendering
//!
//! Pure functions from entities to text. Nothing here prints.

use std::path::Path;

use resend_provider::{ApiResponse, Attachment, Domain, ListEnvelope, ReceivedEmail};

const HTML_PREVIEW_CHARS: usize = 200;
const NO_SUBJECT: &str = "(no subject)";
const NOT_AVAILABLE: &str = "N/A";
const SEPARATOR: &str = "---";

/// Pretty-printed `{ "data": ..., "error": null }` envelope of a response.
pub fn json_envelope<T>(response: &ApiResponse<T>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&response.envelope())
}

pub fn email_list(list: &ListEnvelope<ReceivedEmail>) -> String {
    if list.data.is_empty() {
        return "No received emails found".to_string();
    }

    let mut lines = vec![
        format!("Found {} received email(s):", list.data.len()),
        String::new(),
    ];
    for email in &list.data {
        lines.push(format!("ID: {}", email.id));
        lines.push(format!("From: {}", email.from));
        lines.push(format!("To: {}", email.to.joined()));
        lines.push(format!(
            "Subject: {}",
            or_placeholder(email.subject.as_deref(), NO_SUBJECT)
        ));
        lines.push(format!("Created: {}", email.created_at));
        lines.push(SEPARATOR.to_string());
    }
    if list.has_more {
        lines.push(String::new());
        lines.push("(More emails available - use pagination)".to_string());
    }
    lines.join("\n")
}

pub fn email_detail(email: &ReceivedEmail) -> String {
    [
        format!("ID: {}", email.id),
        format!("From: {}", email.from),
        format!("To: {}", email.to.joined()),
        format!(
            "Subject: {}",
            or_placeholder(email.subject.as_deref(), NO_SUBJECT)
        ),
        format!(
            "Text: {}",
            or_placeholder(email.text.as_deref(), NOT_AVAILABLE)
        ),
        format!(
            "HTML: {}",
            email
                .html
                .as_deref()
                .filter(|html| !html.is_empty())
                .map_or_else(|| NOT_AVAILABLE.to_string(), html_preview)
        ),
        format!("Created: {}", email.created_at),
    ]
    .join("\n")
}

pub fn attachment_list(attachments: &[Attachment]) -> String {
    if attachments.is_empty() {
        return "No attachments found".to_string();
    }

    let mut lines = vec![
        format!("Found {} attachment(s):", attachments.len()),
        String::new(),
    ];
    for attachment in attachments {
        lines.push(format!("ID: {}", attachment.id));
        lines.push(format!("Filename: {}", attachment.filename));
        lines.push(format!("Size: {} bytes", attachment.size));
        lines.push(format!("Content-Type: {}", attachment.content_type));
        lines.push(SEPARATOR.to_string());
    }
    lines.join("\n")
}

pub fn attachment_detail(attachment: &Attachment) -> String {
    [
        format!("ID: {}", attachment.id),
        format!("Filename: {}", attachment.filename),
        format!("Size: {} bytes", attachment.size),
        format!("Content-Type: {}", attachment.content_type),
        format!(
            "Content-Disposition: {}",
            or_placeholder(attachment.content_disposition.as_deref(), NOT_AVAILABLE)
        ),
        format!(
            "Content-ID: {}",
            or_placeholder(attachment.content_id.as_deref(), NOT_AVAILABLE)
        ),
    ]
    .join("\n")
}

/// Metadata block shown for `--output`. `destination` is only named, never written.
pub fn attachment_metadata(attachment: &Attachment, destination: &Path) -> String {
    let mut lines = vec![
        format!("Attachment metadata for {}:", attachment.filename),
        format!("  Size: {} bytes", attachment.size),
        format!("  Type: {}", attachment.content_type),
        format!(
            "  Content-ID: {}",
            or_placeholder(attachment.content_id.as_deref(), NOT_AVAILABLE)
        ),
    ];
    if let Some(url) = attachment.download_url.as_deref() {
        lines.push(format!("  Download URL: {url}"));
    }
    lines.push(String::new());
    lines.push(format!(
        "Note: Nothing was written to {}. Downloading the attachment content requires a separate request to the Resend API (use the download URL or content_id).",
        destination.display()
    ));
    lines.join("\n")
}

pub fn domain_list(domains: &[Domain]) -> String {
    if domains.is_empty() {
        return "No domains found".to_string();
    }

    let mut lines = vec![format!("Found {} domain(s):", domains.len()), String::new()];
    for domain in domains {
        lines.push(format!("Name: {}", domain.name));
        lines.push(format!("Status: {}", domain.status));
        lines.push(format!("Region: {}", domain.region));
        lines.push(format!("Created: {}", domain.created_at));
        lines.push(SEPARATOR.to_string());
    }
    lines.join("\n")
}

pub fn domain_detail(domain: &Domain) -> String {
    let mut lines = vec![
        format!("Name: {}", domain.name),
        format!("Status: {}", domain.status),
        format!("Region: {}", domain.region),
        format!("Created: {}", domain.created_at),
        format!(
            "Default: {}",
            domain
                .default
                .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.to_string())
        ),
    ];
    if let Some(records) = domain.records.as_deref().filter(|r| !r.is_empty()) {
        lines.push(String::new());
        lines.push("DNS Records:".to_string());
        for record in records {
            lines.push(format!("  {}: {}", record.record, record.value));
        }
    }
    lines.join("\n")
}

/// First 200 characters followed by `...`, or the whole text when shorter.
fn html_preview(html: &str) -> String {
    match html.char_indices().nth(HTML_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &html[..cut]),
        None => html.to_string(),
    }
}

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(placeholder)
}
