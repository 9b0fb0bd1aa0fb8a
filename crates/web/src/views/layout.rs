use chrono::{Datelike, Utc};
use folio_core::cn;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{footer, header, theme_toggle, SITE_BRAND};
use crate::compose::PageMeta;

/// Document title: `"{title} | Portfolio"`, or the bare brand.
pub fn document_title(meta: &PageMeta) -> String {
    match meta.title.as_deref() {
        Some(title) if !title.trim().is_empty() => format!("{title} | {SITE_BRAND}"),
        _ => SITE_BRAND.to_string(),
    }
}

/// Wrap page content in the site chrome.
pub fn page(meta: &PageMeta, content: Markup) -> Markup {
    let description = meta.description.as_deref().filter(|d| !d.is_empty());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (document_title(meta)) }
                @if let Some(description) = description {
                    meta name="description" content=(description);
                }
                meta name="generator" content=(concat!("folio-web ", env!("CARGO_PKG_VERSION")));
                script { (PreEscaped(theme_toggle::preference_script())) }
            }
            body class=(cn!(
                "flex min-h-screen flex-col bg-white text-surface-900 antialiased",
                "dark:bg-surface-950 dark:text-surface-50",
            )) {
                (header::site_header())
                main class="flex-1" { (content) }
                (footer::site_footer(Utc::now().year()))
                script { (PreEscaped(theme_toggle::mount_script())) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(document_title(&PageMeta::default()), "Portfolio");
        assert_eq!(document_title(&PageMeta::titled("About")), "About | Portfolio");
        assert_eq!(document_title(&PageMeta::titled("  ")), "Portfolio");
    }

    #[test]
    fn renders_chrome_around_content() {
        let meta = PageMeta {
            title: Some("Lighthouse".into()),
            description: Some("A beacon".into()),
        };
        let html = page(&meta, html! { p { "inner" } }).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Lighthouse | Portfolio</title>"));
        assert!(html.contains(r#"<meta name="description" content="A beacon">"#));
        assert!(html.contains(r#"<main class="flex-1"><p>inner</p></main>"#));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn empty_description_is_omitted() {
        let meta = PageMeta {
            title: None,
            description: Some(String::new()),
        };
        let html = page(&meta, html! {}).into_string();
        assert!(!html.contains(r#"name="description""#));
    }
}
