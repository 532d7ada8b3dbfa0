//! Browser tab title formatting.

/// Fallback when the system configuration carries no site title.
pub const DEFAULT_SITE_TITLE: &str = "Vue Element Admin";

/// Compose the document title: `"<page> - <site>"` when a page title is
/// given, the site title alone otherwise. Empty strings count as unset.
pub fn get_page_title(page_title: Option<&str>, site_title: Option<&str>) -> String {
    let site = site_title
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_SITE_TITLE);
    match page_title {
        Some(page) if !page.is_empty() => format!("{} - {}", page, site),
        _ => site.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_and_site() {
        assert_eq!(
            get_page_title(Some("Users"), Some("GoTribe-Admin")),
            "Users - GoTribe-Admin"
        );
    }

    #[test]
    fn test_site_only() {
        assert_eq!(get_page_title(None, Some("GoTribe-Admin")), "GoTribe-Admin");
        assert_eq!(get_page_title(Some(""), Some("GoTribe-Admin")), "GoTribe-Admin");
    }

    #[test]
    fn test_default_site_title() {
        assert_eq!(get_page_title(Some("Users"), None), "Users - Vue Element Admin");
        assert_eq!(get_page_title(Some("Users"), Some("")), "Users - Vue Element Admin");
        assert_eq!(get_page_title(None, None), "Vue Element Admin");
    }
}
