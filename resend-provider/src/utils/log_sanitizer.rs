//! Log sanitization utilities
//!
//! Keeps email bodies and API keys from being fully exposed in debug/error logs.

/// Characters of a response body kept in a log line.
const LOG_BODY_CHARS: usize = 256;

/// Trailing characters of a secret left visible.
const VISIBLE_SECRET_SUFFIX: usize = 4;

/// Shortens a response body for logging.
///
/// Bodies over the limit keep their first characters and report the full
/// byte length.
pub fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_CHARS) {
        Some((cut, _)) => format!("{}... [{} bytes total]", &body[..cut], body.len()),
        None => body.to_string(),
    }
}

/// Masks a secret, keeping only its last few characters.
///
/// Short secrets are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= VISIBLE_SECRET_SUFFIX * 2 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - VISIBLE_SECRET_SUFFIX).collect();
    format!("{}{tail}", "*".repeat(count - VISIBLE_SECRET_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        let body = r#"{"object":"list","data":[]}"#;
        assert_eq!(truncate_for_log(body), body);
    }

    #[test]
    fn long_html_body_is_cut() {
        let body = format!("<html>{}</html>", "a".repeat(1000));
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with("<html>aaa"));
        assert!(logged.ends_with(&format!("... [{} bytes total]", body.len())));
        assert!(logged.len() < body.len());
    }

    #[test]
    fn cut_counts_characters() {
        let body = "ü".repeat(300);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"ü".repeat(256)));
        assert!(logged.contains("... [600 bytes total]"));
    }

    #[test]
    fn mask_keeps_tail() {
        assert_eq!(mask_secret("re_123456789"), "********6789");
    }

    #[test]
    fn mask_hides_short_secrets_entirely() {
        assert_eq!(mask_secret("re_1"), "****");
        assert_eq!(mask_secret(""), "");
    }
}
