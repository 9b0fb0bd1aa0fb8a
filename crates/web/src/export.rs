//! Static export: pre-render every page to `index.html` files.
//!
//! The page set is the three fixed pages plus one detail page per slug the
//! content store lists. A slug that disappears between listing and
//! rendering, or that is not a single safe path segment, is skipped with a
//! warning; an unreachable store yields an export with no detail pages.

use std::path::{Path, PathBuf};

use folio_content::ContentSource;
use folio_core::error::CoreError;

use crate::compose;
use crate::config::SiteConfig;
use crate::pages::SitePage;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render {path}: {source}")]
    Render {
        path: String,
        #[source]
        source: CoreError,
    },
}

/// What an export run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Files written, relative to the output directory.
    pub written: Vec<PathBuf>,
    /// Listed slugs that were not exported: not found on render, or not a
    /// safe file name.
    pub skipped: Vec<String>,
}

/// Render all pages into `out_dir`, creating directories as needed.
pub async fn export_site(
    content: &dyn ContentSource,
    site: &SiteConfig,
    out_dir: &Path,
) -> Result<ExportReport, ExportError> {
    let mut pages = vec![SitePage::Home, SitePage::Projects, SitePage::About];
    pages.extend(
        compose::static_project_paths(content)
            .await
            .into_iter()
            .map(SitePage::ProjectDetail),
    );

    let mut report = ExportReport::default();
    for page in pages {
        if !page.has_safe_path() {
            if let SitePage::ProjectDetail(slug) = page {
                tracing::warn!(%slug, "Slug is not a single path segment, skipping");
                report.skipped.push(slug);
            }
            continue;
        }

        let markup = match page.render(content, site).await {
            Ok(markup) => markup,
            Err(CoreError::NotFound { key, .. }) => {
                tracing::warn!(slug = %key, "Project listed but not found, skipping");
                report.skipped.push(key);
                continue;
            }
            Err(source) => {
                return Err(ExportError::Render {
                    path: page.path(),
                    source,
                })
            }
        };

        let relative = PathBuf::from(page.output_file());
        let target = out_dir.join(&relative);
        write_file(&target, markup.into_string()).await?;
        tracing::debug!(path = %target.display(), "Wrote page");
        report.written.push(relative);
    }

    tracing::info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        out_dir = %out_dir.display(),
        "Static export complete"
    );
    Ok(report)
}

async fn write_file(target: &Path, html: String) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: target.to_path_buf(),
        source,
    };
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    tokio::fs::write(target, html).await.map_err(io_err)
}
