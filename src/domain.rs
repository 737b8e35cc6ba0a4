/// Domain extraction for navigation checks
use url::Url;

const WWW_PREFIX: &str = "www.";

/// Extract the normalized domain from a URL
///
/// Algorithm:
/// 1. Parse as an absolute URL (relative or malformed input fails)
/// 2. Take the host component, lowercased
/// 3. Strip exactly one leading "www." if present
///
/// Examples:
/// - https://www.fake-paypal.com/login?x=1 → fake-paypal.com
/// - https://wwwfoo.com → wwwfoo.com
/// - https://www.www.example.com → www.example.com
/// - not a url → None
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = match Url::parse(url.trim()) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Invalid URL {:?}: {}", url, e);
            return None;
        }
    };

    let host = parsed.host_str()?.to_ascii_lowercase();
    let domain = strip_www(&host);

    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

/// Remove a single anchored "www." prefix
pub(crate) fn strip_www(host: &str) -> &str {
    host.strip_prefix(WWW_PREFIX).unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain_basic() {
        assert_eq!(extract_domain("https://www.google.com"), Some("google.com".to_string()));
        assert_eq!(extract_domain("https://google.com"), Some("google.com".to_string()));
        assert_eq!(extract_domain("http://example.com"), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_domain_keeps_subdomains() {
        assert_eq!(extract_domain("https://ai.microsoft.com"), Some("ai.microsoft.com".to_string()));
        assert_eq!(extract_domain("https://news.bbc.co.uk/article"), Some("news.bbc.co.uk".to_string()));
    }

    #[test]
    fn test_extract_domain_with_path_and_query() {
        assert_eq!(
            extract_domain("https://www.fake-paypal.com/login?x=1"),
            Some("fake-paypal.com".to_string())
        );
        assert_eq!(
            extract_domain("https://github.com/rust-lang/rust#readme"),
            Some("github.com".to_string())
        );
    }

    #[test]
    fn test_extract_domain_www_prefix_is_literal_and_anchored() {
        assert_eq!(extract_domain("https://wwwfoo.com"), Some("wwwfoo.com".to_string()));
        assert_eq!(extract_domain("https://foo.www.com"), Some("foo.www.com".to_string()));
        assert_eq!(extract_domain("https://www.www.example.com"), Some("www.example.com".to_string()));
    }

    #[test]
    fn test_extract_domain_lowercases_host() {
        assert_eq!(extract_domain("https://WWW.Malware-Test.COM/"), Some("malware-test.com".to_string()));
    }

    #[test]
    fn test_extract_domain_ports_and_ips() {
        assert_eq!(extract_domain("http://localhost:3000"), Some("localhost".to_string()));
        assert_eq!(extract_domain("http://127.0.0.1:8080/x"), Some("127.0.0.1".to_string()));
        assert_eq!(extract_domain("http://user:pw@www.example.com:81"), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_domain_failures() {
        assert_eq!(extract_domain(""), None);
        assert_eq!(extract_domain("not a url"), None);
        assert_eq!(extract_domain("/relative/path"), None);
        assert_eq!(extract_domain("example.com"), None);
        assert_eq!(extract_domain("https://"), None);
        assert_eq!(extract_domain("mailto:someone@example.com"), None);
        assert_eq!(extract_domain("file:///etc/hosts"), None);
    }

    #[test]
    fn test_strip_www() {
        assert_eq!(strip_www("www.example.com"), "example.com");
        assert_eq!(strip_www("example.com"), "example.com");
        assert_eq!(strip_www("www."), "");
    }
}
