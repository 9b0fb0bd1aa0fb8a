use folio_content::models::Project;
use maud::{html, Markup};

use super::icons;

/// Tag chips, shared by cards and the detail page.
pub fn tags(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul class="flex flex-wrap gap-2" {
                @for tag in tags {
                    li class="rounded-full bg-surface-100 px-3 py-1 text-xs font-medium text-surface-600 dark:bg-surface-800 dark:text-surface-300" {
                        (tag)
                    }
                }
            }
        }
    }
}

/// A clickable card linking to the project's detail page.
pub fn project_card(project: &Project) -> Markup {
    html! {
        a href=(project.path())
            class="group flex flex-col gap-4 rounded-2xl border border-surface-200 p-6 transition hover:border-accent-500 hover:shadow-lg dark:border-surface-800 dark:hover:border-accent-400" {
            h3 class="text-xl font-semibold text-surface-900 group-hover:text-accent-600 dark:text-surface-50 dark:group-hover:text-accent-400" {
                (project.title)
            }
            @if let Some(description) = project.description() {
                p class="line-clamp-3 text-surface-600 dark:text-surface-400" { (description) }
            }
            (tags(&project.tags))
            span class="mt-auto inline-flex items-center gap-1 text-sm font-medium text-accent-600 dark:text-accent-400" {
                "View project"
                (icons::arrow_right("h-4 w-4 transition-transform group-hover:translate-x-1"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_content::models::Slug;

    use super::*;

    fn project() -> Project {
        Project {
            id: "p1".into(),
            created_at: None,
            title: "Tide <Tables>".into(),
            slug: Slug {
                current: "tide-tables".into(),
            },
            description: Some("Harbour charts".into()),
            tags: vec!["Rust".into(), "Maps".into()],
            url: None,
            image: None,
            body: vec![],
        }
    }

    #[test]
    fn renders_title_description_tags_and_link() {
        let html = project_card(&project()).into_string();
        assert!(html.starts_with(r#"<a href="/projects/tide-tables""#));
        assert!(html.contains("Tide &lt;Tables&gt;"));
        assert!(html.contains("Harbour charts"));
        assert!(html.contains(">Rust</li>"));
        assert!(html.contains(">Maps</li>"));
        assert!(html.contains("View project"));
    }

    #[test]
    fn minimal_project_has_no_optional_parts() {
        let mut bare = project();
        bare.description = Some("   ".into());
        bare.tags.clear();
        let html = project_card(&bare).into_string();
        assert!(!html.contains("<p class"));
        assert!(!html.contains("<ul"));
        assert!(html.contains("View project"));
    }
}
