//! URL slug generation.
//!
//! Slugs are the routing key for project detail pages, so the output must
//! be stable: applying [`slugify`] to an existing slug returns it unchanged.

/// Convert arbitrary text into a URL-safe slug.
///
/// - Letters are lowercased.
/// - Runs of whitespace, underscores and hyphens collapse to a single `-`.
/// - Any other non-alphanumeric character is dropped.
/// - Leading and trailing hyphens are never produced.
///
/// # Examples
///
/// ```
/// use folio_core::slug::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("snake_case_text"), "snake-case-text");
/// assert_eq!(slugify("---hello---"), "hello");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut separator_pending = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if separator_pending && !slug.is_empty() {
                slug.push('-');
            }
            separator_pending = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            separator_pending = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_is_removed() {
        assert_eq!(
            slugify("Hello, World! How's it going?"),
            "hello-world-hows-it-going"
        );
    }

    #[test]
    fn repeated_spaces_collapse() {
        assert_eq!(slugify("too   many    spaces"), "too-many-spaces");
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(slugify("  padded text  "), "padded-text");
    }

    #[test]
    fn empty_input() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn underscores_become_hyphens() {
        assert_eq!(slugify("snake_case_text"), "snake-case-text");
    }

    #[test]
    fn edge_hyphens_stripped() {
        assert_eq!(slugify("---hello---"), "hello");
    }

    #[test]
    fn existing_slug_unchanged() {
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn mixed_separators_collapse() {
        assert_eq!(slugify("a - _ b"), "a-b");
    }

    #[test]
    fn only_symbols() {
        assert_eq!(slugify("!!! ??? ***"), "");
    }

    #[test]
    fn idempotent_over_samples() {
        let samples = [
            "Hello World",
            "  Rust & WebAssembly: a Guide  ",
            "C++ / Qt_6 -- port",
            "Ünïcödé Tïtle 2024",
            "---",
            "x",
        ];
        for sample in samples {
            let once = slugify(sample);
            assert_eq!(slugify(&once), once, "not idempotent for {sample:?}");
            assert!(
                once.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in {once:?}"
            );
            assert!(!once.starts_with('-') && !once.ends_with('-'));
            assert!(!once.contains("--"));
        }
    }
}
