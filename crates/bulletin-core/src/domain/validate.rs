//! Input validation and write-boundary sanitization.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DomainError;

/// Compiled shape check for `local@domain.tld` contact addresses.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// HTML-escape user-supplied text before it is stored.
pub fn sanitize(raw: &str) -> String {
    html_escape::encode_safe(raw).to_string()
}

/// Reject an empty or whitespace-only required field.
pub fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject an address that does not match the `local@domain.tld` shape.
pub fn require_email(email: &str) -> Result<(), DomainError> {
    if !EMAIL_RE.is_match(email) {
        return Err(DomainError::Validation("invalid email format".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_escapes_markup() {
        let escaped = sanitize("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(escaped.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_sanitize_passes_plain_text() {
        assert_eq!(sanitize("hello world"), "hello world");
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("title", "").is_err());
        assert!(require("title", "   ").is_err());
        assert!(require("title", "ok").is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(require_email("a@b.co").is_ok());
        assert!(require_email("ann@x.com").is_ok());
        assert!(require_email("not-an-email").is_err());
        assert!(require_email("a b@c.de").is_err());
        assert!(require_email("a@b").is_err());
    }
}
