//! GROQ queries issued against the content store.
//!
//! The query text is part of the contract with the view models in
//! [`crate::models`]: removing a projected field here silently empties the
//! corresponding model field, so the tests below pin the filters and
//! projections.

/// All projects, newest first. Summary projection (no `body`).
pub const PROJECTS_QUERY: &str = r#"
  *[_type == "project" && defined(slug.current)] | order(_createdAt desc) {
    _id,
    _createdAt,
    title,
    slug,
    description,
    image,
    tags,
    url
  }
"#;

/// A single project by slug, including its rich-text `body`.
///
/// Parameter: `$slug`.
pub const PROJECT_BY_SLUG_QUERY: &str = r#"
  *[_type == "project" && slug.current == $slug][0] {
    _id,
    _createdAt,
    title,
    slug,
    description,
    image,
    tags,
    url,
    body
  }
"#;

/// Every project slug, for pre-rendering detail pages.
pub const PROJECT_SLUGS_QUERY: &str = r#"
  *[_type == "project" && defined(slug.current)][].slug.current
"#;

/// The singleton site settings document.
pub const SITE_SETTINGS_QUERY: &str = r#"
  *[_type == "siteSettings"][0] {
    _id,
    name,
    title,
    description,
    socialLinks
  }
"#;

/// Name of the parameter bound by [`PROJECT_BY_SLUG_QUERY`].
pub const SLUG_PARAM: &str = "slug";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_query_filters_and_orders() {
        assert!(!PROJECTS_QUERY.trim().is_empty());
        assert!(PROJECTS_QUERY.contains(r#"_type == "project""#));
        assert!(PROJECTS_QUERY.contains("defined(slug.current)"));
        assert!(PROJECTS_QUERY.contains("order(_createdAt desc)"));
    }

    #[test]
    fn projects_query_projects_card_fields() {
        for field in ["_id", "title", "slug", "description", "image", "tags", "url"] {
            assert!(PROJECTS_QUERY.contains(field), "missing field {field}");
        }
        assert!(!PROJECTS_QUERY.contains("body"));
    }

    #[test]
    fn project_by_slug_query_binds_slug() {
        assert!(PROJECT_BY_SLUG_QUERY.contains(r#"_type == "project""#));
        assert!(PROJECT_BY_SLUG_QUERY.contains("slug.current == $slug"));
        assert!(PROJECT_BY_SLUG_QUERY.contains(&format!("${SLUG_PARAM}")));
    }

    #[test]
    fn project_by_slug_query_selects_first_with_body() {
        assert!(PROJECT_BY_SLUG_QUERY.contains("[0]"));
        assert!(PROJECT_BY_SLUG_QUERY.contains("body"));
    }

    #[test]
    fn settings_query_selects_singleton() {
        assert!(SITE_SETTINGS_QUERY.contains(r#"_type == "siteSettings""#));
        assert!(SITE_SETTINGS_QUERY.contains("[0]"));
        for field in ["name", "title", "description", "socialLinks"] {
            assert!(SITE_SETTINGS_QUERY.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn slugs_query_returns_defined_slugs_only() {
        assert!(PROJECT_SLUGS_QUERY.contains(r#"_type == "project""#));
        assert!(PROJECT_SLUGS_QUERY.contains("defined(slug.current)"));
        assert!(PROJECT_SLUGS_QUERY.contains("[].slug.current"));
    }
}
