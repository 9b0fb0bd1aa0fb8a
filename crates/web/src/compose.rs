//! Page composers.
//!
//! One function per route. Each issues its read(s) through
//! [`ContentRepo`], collapses "absent" and "failed" into the same fallback
//! branch, and returns a plain view struct for [`crate::views`] to render.
//! Content store errors stop here: they are logged and never reach a visitor.

use folio_content::models::{Project, SiteSettings};
use folio_content::{ContentRepo, ContentSource, Fetched};
use folio_core::dates::format_date;
use folio_core::error::CoreError;

/// Title and description for the document `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Page-specific title; the layout appends the site brand.
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }
}

/// Projects rendered as a grid on the home and projects pages.
#[derive(Debug, Clone, Default)]
pub struct ProjectGrid {
    /// In fetch order (newest first). Empty means "show the placeholder".
    pub projects: Vec<Project>,
}

impl ProjectGrid {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Everything the project detail page shows.
#[derive(Debug, Clone)]
pub struct ProjectDetail {
    pub meta: PageMeta,
    pub project: Project,
    /// Resolved CDN URL for the project image, if any.
    pub image_url: Option<String>,
    /// Creation date as long-form text, e.g. "January 15, 2024".
    pub published: Option<String>,
}

/// The about page: backend-supplied settings, or `None` for fallback copy.
#[derive(Debug, Clone, Default)]
pub struct AboutPage {
    pub settings: Option<SiteSettings>,
}

impl AboutPage {
    pub fn bio(&self) -> Option<&str> {
        self.settings.as_ref().and_then(SiteSettings::bio)
    }

    pub fn social_links(&self) -> &[folio_content::models::SocialLink] {
        self.settings
            .as_ref()
            .map(|s| s.social_links.as_slice())
            .unwrap_or_default()
    }
}

async fn project_grid(source: &dyn ContentSource, context: &'static str) -> ProjectGrid {
    let fetched = Fetched::from(ContentRepo::list_projects(source).await);
    ProjectGrid {
        projects: fetched.into_option(context).unwrap_or_default(),
    }
}

/// Home page: hero plus the project grid.
pub async fn home(source: &dyn ContentSource) -> ProjectGrid {
    project_grid(source, "home").await
}

/// Projects index: the same list as the home page, full width.
pub async fn projects_index(source: &dyn ContentSource) -> ProjectGrid {
    project_grid(source, "projects_index").await
}

/// Head metadata for a project detail page.
///
/// A missing project and a failed fetch both produce the not-found title,
/// since both end in a 404.
pub fn project_meta(project: Option<&Project>) -> PageMeta {
    match project {
        Some(project) => PageMeta {
            title: Some(project.title.clone()),
            description: Some(project.description().unwrap_or_default().to_string()),
        },
        None => PageMeta::titled("Project not found"),
    }
}

/// Project detail page for `slug`.
///
/// Returns [`CoreError::NotFound`] when no project has that slug -- or when
/// the store could not be asked, which the visitor cannot tell apart.
pub async fn project_detail(
    source: &dyn ContentSource,
    slug: &str,
) -> Result<ProjectDetail, CoreError> {
    let fetched = Fetched::from(ContentRepo::find_project_by_slug(source, slug).await);
    let project = fetched
        .into_option("project_detail")
        .ok_or_else(|| CoreError::NotFound {
            entity: "Project",
            key: slug.to_string(),
        })?;

    let image_url = project
        .image
        .as_ref()
        .and_then(|image| source.image_url(image));

    let published = project.created_at.as_deref().and_then(|ts| match format_date(ts) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::debug!(slug, error = %err, "Ignoring unparsable creation timestamp");
            None
        }
    });

    Ok(ProjectDetail {
        meta: project_meta(Some(&project)),
        project,
        image_url,
        published,
    })
}

/// Slugs of every project detail page to pre-render.
///
/// A failed fetch yields an empty list: pages are then rendered on demand.
pub async fn static_project_paths(source: &dyn ContentSource) -> Vec<String> {
    Fetched::from(ContentRepo::list_project_slugs(source).await)
        .into_option("static_project_paths")
        .unwrap_or_default()
}

/// About page: bio and social links from site settings.
pub async fn about(source: &dyn ContentSource) -> AboutPage {
    AboutPage {
        settings: Fetched::from(ContentRepo::find_site_settings(source).await).into_option("about"),
    }
}
