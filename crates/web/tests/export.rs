//! Integration tests for the static exporter.

mod common;

use std::path::PathBuf;

use common::{project, StaticContent};
use folio_web::config::SiteConfig;
use folio_web::export::export_site;

#[tokio::test]
async fn writes_fixed_pages_and_one_per_project() {
    let dir = tempfile::tempdir().unwrap();
    let content = StaticContent::empty()
        .with_project(project("kite", "Kite"))
        .with_project(project("tide", "Tide"));

    let report = export_site(&content, &SiteConfig::default(), dir.path())
        .await
        .unwrap();

    assert_eq!(
        report.written,
        [
            "index.html",
            "projects/index.html",
            "about/index.html",
            "projects/kite/index.html",
            "projects/tide/index.html",
        ]
        .map(PathBuf::from)
    );
    assert!(report.skipped.is_empty());

    let kite = std::fs::read_to_string(dir.path().join("projects/kite/index.html")).unwrap();
    assert!(kite.contains("<title>Kite | Portfolio</title>"));
}

#[tokio::test]
async fn unreachable_store_exports_only_fixed_pages() {
    let dir = tempfile::tempdir().unwrap();

    let report = export_site(&StaticContent::unreachable(), &SiteConfig::default(), dir.path())
        .await
        .unwrap();

    assert_eq!(report.written.len(), 3);
    let home = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(home.contains("No projects yet."));
}

#[tokio::test]
async fn slugs_that_leave_the_output_directory_are_skipped() {
    let root = tempfile::tempdir().unwrap();
    let out_dir = root.path().join("dist");
    let content = StaticContent::empty()
        .with_project(project("kite", "Kite"))
        .with_project(project("../../escaped", "Escaped"));

    let report = export_site(&content, &SiteConfig::default(), &out_dir)
        .await
        .unwrap();

    assert_eq!(report.skipped, vec!["../../escaped".to_string()]);
    assert!(report
        .written
        .iter()
        .all(|path| !path.to_string_lossy().contains("..")));
    assert!(out_dir.join("projects/kite/index.html").exists());
    assert!(!root.path().join("escaped").exists());
    assert!(!root.path().parent().unwrap().join("escaped").exists());
}
