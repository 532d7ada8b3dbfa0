//! Form-level validation helpers.

use once_cell::sync::Lazy;
use regex::Regex;

// Permissive URL shape: optional http/https scheme, dotted host segments,
// optional port, optional path/query. Host-only values are accepted.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([\w-]+\.)+[\w-]+(:\d+)?(/[\w\- ./?%&=]*)?$")
        .expect("URL pattern must compile")
});

/// Validate a URL form field.
///
/// Empty input fails as a required field; anything that does not match the
/// permissive URL shape fails as a format error.
pub fn validate_url(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("请输入链接".to_string());
    }
    if !URL_PATTERN.is_match(value) {
        return Err("请输入有效的链接".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_required() {
        let err = validate_url("").unwrap_err();
        assert_eq!(err, "请输入链接");
    }

    #[test]
    fn test_host_only_is_accepted() {
        assert!(validate_url("example.com").is_ok());
        assert!(validate_url("sub.example-site.com").is_ok());
    }

    #[test]
    fn test_full_urls_are_accepted() {
        assert!(validate_url("https://example.com:8080/path?x=1").is_ok());
        assert!(validate_url("http://cdn.gotribe.cn/images/logo.png").is_ok());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = validate_url("not a url!!").unwrap_err();
        assert_eq!(err, "请输入有效的链接");
        assert!(validate_url("http://").is_err());
        assert!(validate_url("example").is_err());
    }
}
