// File: src/patterns.rs
// Purpose: Compiled regular expressions shared by the string rules

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Lowercase-only by design: `User@Example.com` is rejected.
pub const EMAIL_PATTERN: &str = r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$";

/// http(s) scheme followed by a host with at least one dot.
pub const URL_PATTERN: &str =
    r"^https?://[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+(:[0-9]{1,5})?([/?#][^\s]*)?$";

static DEFAULT_PATTERNS: Lazy<Patterns> = Lazy::new(|| Patterns {
    email: Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"),
    url: Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"),
});

/// The regular expressions used by `email` and `url` rules
///
/// Compiled once and read-only afterwards, so a single instance can be shared
/// across threads. Most callers use [`Patterns::global`].
#[derive(Debug, Clone)]
pub struct Patterns {
    email: Regex,
    url: Regex,
}

impl Patterns {
    /// Compile a custom pattern set
    pub fn new(email: &str, url: &str) -> Result<Self> {
        Ok(Self {
            email: Regex::new(email)?,
            url: Regex::new(url)?,
        })
    }

    /// The process-wide default patterns
    pub fn global() -> &'static Patterns {
        &DEFAULT_PATTERNS
    }

    pub fn is_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    pub fn is_url(&self, value: &str) -> bool {
        self.url.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        let p = Patterns::global();
        assert!(p.is_email("a@gg.com"));
        assert!(p.is_email("first.last+tag@mail.example.org"));
        assert!(!p.is_email("agg.com"));
        assert!(!p.is_email("foo@bar"));
        assert!(!p.is_email("@gg.com"));
        assert!(!p.is_email("a@gg.museum"));
    }

    #[test]
    fn test_email_is_lowercase_only() {
        assert!(!Patterns::global().is_email("A@GG.COM"));
        assert!(!Patterns::global().is_email("Someone@gg.com"));
    }

    #[test]
    fn test_url_validation() {
        let p = Patterns::global();
        assert!(p.is_url("http://foo.com"));
        assert!(p.is_url("https://sub.example.co.uk/path?q=1"));
        assert!(p.is_url("http://localhost.dev:8080/"));
        assert!(!p.is_url("http://foocom"));
        assert!(!p.is_url("ftp://foo.com"));
        assert!(!p.is_url("foo.com"));
        assert!(!p.is_url("https://"));
    }

    #[test]
    fn test_custom_patterns() {
        let p = Patterns::new(r"(?i)^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$", URL_PATTERN).unwrap();
        assert!(p.is_email("A@GG.COM"));
        assert!(p.is_url("http://foo.com"));
    }

    #[test]
    fn test_invalid_custom_pattern() {
        assert!(Patterns::new("(", URL_PATTERN).is_err());
    }
}
