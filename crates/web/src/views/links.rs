//! Link targets taken from the content store.

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// `href` if it is safe to render as a link target, otherwise `None`.
///
/// Relative references (`/about`, `#top`, `notes.html`) and the `http`,
/// `https` and `mailto` schemes pass; anything else (`javascript:`,
/// `data:`, `vbscript:` ...) is dropped.
pub fn safe_href(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    // A scheme is whatever precedes the first `:` that comes before any
    // `/`, `?` or `#`.
    let scheme_end = href.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(end) if href[end..].starts_with(':') => {
            let scheme = &href[..end];
            ALLOWED_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
                .then_some(href)
        }
        _ if href.chars().any(char::is_control) => None,
        _ => Some(href),
    }
}

/// Whether `href` leaves the site, and so opens in a new tab.
pub fn is_external(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_targets_pass() {
        for href in [
            "https://docs.rs",
            "HTTP://example.com",
            "mailto:jeff@example.com",
            "/about",
            "#top",
            "?page=2",
            "notes.html",
            "//cdn.example.com/x",
        ] {
            assert_eq!(safe_href(href), Some(href), "{href}");
        }
    }

    #[test]
    fn script_and_data_schemes_are_dropped() {
        for href in [
            "javascript:alert(1)",
            "  JavaScript:alert(1)",
            "data:text/html;base64,PHA+",
            "vbscript:msgbox",
            "",
            "   ",
        ] {
            assert_eq!(safe_href(href), None, "{href:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(safe_href("  https://docs.rs  "), Some("https://docs.rs"));
    }

    #[test]
    fn external_detection() {
        assert!(is_external("https://docs.rs"));
        assert!(!is_external("/about"));
        assert!(!is_external("mailto:jeff@example.com"));
    }
}
