//! Long URL validation.
//!
//! A long URL is accepted when it parses as an absolute URL that carries both
//! a scheme and a host. The URL is never rewritten; the stored value is the
//! submitted string, so it must also be usable verbatim as a `Location` header.

use url::Url;

/// Returns true if `raw` has a scheme and a non-empty host and contains no
/// control characters.
///
/// `Url::parse` silently strips tabs and newlines, so they are rejected
/// before parsing.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(!is_valid_url("not-a-url"));
/// assert!(!is_valid_url("mailto:someone@example.com"));
/// assert!(!is_valid_url("https://example.com/a\nb"));
/// ```
pub fn is_valid_url(raw: &str) -> bool {
    if raw.chars().any(char::is_control) {
        return false;
    }

    match Url::parse(raw) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_url("https://example.com/page"));
        assert!(is_valid_url("http://example.com"));
    }

    #[test]
    fn test_accepts_other_schemes_with_host() {
        assert!(is_valid_url("ftp://files.example.com/archive.zip"));
    }

    #[test]
    fn test_accepts_ports_queries_and_fragments() {
        assert!(is_valid_url("https://example.com:8443/a/b?q=1&r=2#frag"));
    }

    #[test]
    fn test_accepts_ip_hosts() {
        assert!(is_valid_url("http://192.168.1.1/admin"));
        assert!(is_valid_url("http://[::1]:8080/"));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("example.com/page"));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(!is_valid_url("https://example.com/a\nb"));
        assert!(!is_valid_url("https://example.com/a\tb"));
        assert!(!is_valid_url("https://exam\rple.com"));
        assert!(!is_valid_url("https://example.com/\u{7f}"));
    }

    #[test]
    fn test_accepted_urls_are_valid_header_values() {
        for raw in [
            "https://example.com/page",
            "https://example.com:8443/a/b?q=1&r=2#frag",
            "http://[::1]:8080/",
        ] {
            assert!(is_valid_url(raw));
            assert!(axum::http::HeaderValue::from_str(raw).is_ok());
        }
    }
}
