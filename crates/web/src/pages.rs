//! The site's page set, shared by the HTTP handlers and the static exporter.

use folio_content::ContentSource;
use folio_core::error::CoreError;
use maud::Markup;

use crate::compose;
use crate::config::SiteConfig;
use crate::views;

/// One renderable page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitePage {
    Home,
    Projects,
    ProjectDetail(String),
    About,
}

impl SitePage {
    /// URL path the page is served at.
    pub fn path(&self) -> String {
        match self {
            SitePage::Home => "/".into(),
            SitePage::Projects => "/projects".into(),
            SitePage::ProjectDetail(slug) => format!("/projects/{slug}"),
            SitePage::About => "/about".into(),
        }
    }

    /// Whether the page maps to a file inside the export directory.
    ///
    /// Detail slugs come from the content store and must be a single path
    /// segment of ASCII letters, digits, `-` or `_`.
    pub fn has_safe_path(&self) -> bool {
        match self {
            SitePage::ProjectDetail(slug) => {
                !slug.is_empty()
                    && slug
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            }
            _ => true,
        }
    }

    /// Relative file the page is written to by the exporter.
    pub fn output_file(&self) -> String {
        match self {
            SitePage::Home => "index.html".into(),
            other => format!("{}/index.html", other.path().trim_start_matches('/')),
        }
    }

    /// Fetch the page's content and render the full document.
    ///
    /// Only [`SitePage::ProjectDetail`] can fail, with
    /// [`CoreError::NotFound`] for an unknown slug.
    pub async fn render(
        &self,
        content: &dyn ContentSource,
        site: &SiteConfig,
    ) -> Result<Markup, CoreError> {
        Ok(match self {
            SitePage::Home => views::pages::home(&compose::home(content).await, site),
            SitePage::Projects => {
                views::pages::projects_index(&compose::projects_index(content).await, site)
            }
            SitePage::ProjectDetail(slug) => {
                views::pages::project_detail(&compose::project_detail(content, slug).await?)
            }
            SitePage::About => views::pages::about(&compose::about(content).await, site),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_files() {
        assert_eq!(SitePage::Home.path(), "/");
        assert_eq!(SitePage::Home.output_file(), "index.html");
        assert_eq!(SitePage::Projects.output_file(), "projects/index.html");
        assert_eq!(SitePage::About.output_file(), "about/index.html");

        let detail = SitePage::ProjectDetail("kite".into());
        assert_eq!(detail.path(), "/projects/kite");
        assert_eq!(detail.output_file(), "projects/kite/index.html");
    }

    #[test]
    fn only_single_segment_slugs_are_safe() {
        assert!(SitePage::Home.has_safe_path());
        assert!(SitePage::ProjectDetail("tide-tables_2".into()).has_safe_path());
        for slug in ["", "..", "../../escaped", "a/b", "a\\b", "/abs", "caf\u{e9}"] {
            assert!(!SitePage::ProjectDetail(slug.into()).has_safe_path(), "{slug:?}");
        }
    }
}
