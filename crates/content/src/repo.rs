//! Typed reads against the content store.
//!
//! Each method pairs one query from [`crate::queries`] with the view model
//! it projects into.

use crate::error::ContentError;
use crate::models::{Project, SiteSettings};
use crate::queries::{
    PROJECTS_QUERY, PROJECT_BY_SLUG_QUERY, PROJECT_SLUGS_QUERY, SITE_SETTINGS_QUERY, SLUG_PARAM,
};
use crate::source::{fetch, fetch_each, ContentSource, QueryParams};

pub struct ContentRepo;

impl ContentRepo {
    /// All projects, newest first. `None` when the store returns `null`.
    ///
    /// Entries that do not decode as a [`Project`] are skipped.
    pub async fn list_projects(
        source: &dyn ContentSource,
    ) -> Result<Option<Vec<Project>>, ContentError> {
        fetch_each(source, PROJECTS_QUERY, &QueryParams::new()).await
    }

    /// A single project by slug, with its body.
    pub async fn find_project_by_slug(
        source: &dyn ContentSource,
        slug: &str,
    ) -> Result<Option<Project>, ContentError> {
        let params = QueryParams::new().with(SLUG_PARAM, slug);
        fetch(source, PROJECT_BY_SLUG_QUERY, &params).await
    }

    /// Every defined project slug.
    pub async fn list_project_slugs(
        source: &dyn ContentSource,
    ) -> Result<Option<Vec<String>>, ContentError> {
        fetch(source, PROJECT_SLUGS_QUERY, &QueryParams::new()).await
    }

    /// The site settings singleton, if one exists.
    pub async fn find_site_settings(
        source: &dyn ContentSource,
    ) -> Result<Option<SiteSettings>, ContentError> {
        fetch(source, SITE_SETTINGS_QUERY, &QueryParams::new()).await
    }
}
