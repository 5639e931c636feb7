//! Input checks shared by the API handlers.

use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 6;

// Loose on purpose: double dots, trailing dots inside the domain and
// unknown TLDs all pass
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// `local@domain.tld` with no whitespace and exactly one `@`.
///
/// `$` anchors at the very end, so a trailing newline is rejected.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Password policy: at least [`MIN_PASSWORD_LEN`] characters, nothing else.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Treat an absent field and an empty string the same way.
pub fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in [
            "a@b.com",
            "first.last@example.co.uk",
            "user+tag@sub.domain.io",
            "x@y.z",
            "a@b..c",
            "a@.b.c",
        ] {
            assert!(is_valid_email(email), "{} should be accepted", email);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@.com",
            "user@example.",
            "user@@example.com",
            "us er@example.com",
            "user@exa mple.com",
            "user@example.com ",
            "a@b@c.com",
            "a\tb@example.com",
        ] {
            assert!(!is_valid_email(email), "{} should be rejected", email);
        }
    }

    #[test]
    fn trailing_newline_is_rejected() {
        assert!(!is_valid_email("a@b.com\n"));
        assert!(!is_valid_email("a@b.com\r\n"));
        assert!(is_valid_email("a@b.com"));
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(!is_valid_password("short"));
        assert!(is_valid_password("secret"));
        // 6 characters, 12 bytes
        assert!(is_valid_password("şşşşşş"));
        assert!(!is_valid_password("şşşşş"));
    }

    #[test]
    fn required_drops_empty_strings() {
        assert_eq!(required(None), None);
        assert_eq!(required(Some(String::new())), None);
        assert_eq!(required(Some("x".to_string())), Some("x".to_string()));
    }
}
