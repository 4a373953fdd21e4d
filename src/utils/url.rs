//! External URL validation.
//!
//! Content links end up in `<iframe src>`, `<img src>` and `<a href>`, so
//! they are checked against a domain whitelist when content loads.

use thiserror::Error;

use crate::config::ALLOWED_LINK_DOMAINS;

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,
    /// Only `https://` is accepted; the site itself is served over TLS.
    #[error("URL must start with https://")]
    InsecureProtocol,
    #[error("URL has no host")]
    NoHost,
    #[error("domain '{0}' is not allowed")]
    DomainNotAllowed(String),
}

/// Validate a URL for use as an external link or embed source.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with https://
/// 3. URL has a valid host
/// 4. Host is in the allowed domains list
pub fn validate_external_url(url: &str) -> Result<&str, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let Some(host) = extract_host(url) else {
        return if url.to_lowercase().starts_with("https://") {
            Err(UrlValidationError::NoHost)
        } else {
            Err(UrlValidationError::InsecureProtocol)
        };
    };

    if !is_domain_allowed(&host) {
        return Err(UrlValidationError::DomainNotAllowed(host));
    }

    Ok(url)
}

/// Extract the lowercase host from an `https://` URL, without `www.` or port.
fn extract_host(url: &str) -> Option<String> {
    let scheme_len = "https://".len();
    if !url.get(..scheme_len)?.eq_ignore_ascii_case("https://") {
        return None;
    }
    let rest = &url[scheme_len..];

    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}

/// Check if a domain is in the allowed list (exact or subdomain match).
fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_LINK_DOMAINS.iter().any(|allowed| {
        host == *allowed
            || host
                .strip_suffix(allowed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert_eq!(
            validate_external_url("https://streamable.com/e/3s5t42"),
            Ok("https://streamable.com/e/3s5t42")
        );
        assert!(validate_external_url("https://www.linkedin.com/in/dheerajdharan/").is_ok());
        assert!(validate_external_url("  https://picsum.photos/seed/led/800/600 ").is_ok());
        assert!(validate_external_url("HTTPS://Drive.Google.com/file/d/x/preview").is_ok());
        assert!(validate_external_url("https://wa.me/917907262805").is_ok());
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(validate_external_url(""), Err(UrlValidationError::Empty));
        assert_eq!(
            validate_external_url("http://streamable.com/e/3s5t42"),
            Err(UrlValidationError::InsecureProtocol)
        );
        assert_eq!(
            validate_external_url("javascript:alert(1)"),
            Err(UrlValidationError::InsecureProtocol)
        );
        assert_eq!(validate_external_url("https://"), Err(UrlValidationError::NoHost));
        assert_eq!(
            validate_external_url("https://evil.com/phish"),
            Err(UrlValidationError::DomainNotAllowed("evil.com".to_string()))
        );
    }

    #[test]
    fn test_lookalike_domain_rejected() {
        assert_eq!(
            validate_external_url("https://notstreamable.com/e/1"),
            Err(UrlValidationError::DomainNotAllowed("notstreamable.com".to_string()))
        );
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://player.vimeo.com:443/video/1"),
            Some("player.vimeo.com".to_string())
        );
        assert_eq!(
            extract_host("https://www.youtube.com?v=1"),
            Some("youtube.com".to_string())
        );
        assert_eq!(extract_host("https://"), None);
        assert_eq!(extract_host("ftp://example.com"), None);
    }
}
