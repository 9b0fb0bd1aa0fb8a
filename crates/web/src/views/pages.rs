//! Full page documents, one per route plus the error pages.

use folio_core::cn;
use maud::{html, Markup};

use super::layout::page;
use super::project_card::{project_card, tags};
use super::links::safe_href;
use super::{icons, portable_text};
use crate::compose::{AboutPage, PageMeta, ProjectDetail, ProjectGrid};
use crate::config::SiteConfig;

const HEADING: &str = "text-surface-900 dark:text-surface-50";
const INLINE_LINK: &str =
    "font-medium text-accent-600 underline underline-offset-4 dark:text-accent-400";

fn studio_link(site: &SiteConfig) -> Markup {
    html! { a href=(site.studio_url) class=(INLINE_LINK) { "Sanity Studio" } }
}

/// The grid, or a placeholder pointing at the studio when there is nothing
/// to show.
fn project_grid(grid: &ProjectGrid, site: &SiteConfig, spacing: &str) -> Markup {
    html! {
        @if grid.is_empty() {
            div class=(cn!(
                "rounded-xl border border-dashed p-12 text-center",
                "border-surface-300 dark:border-surface-700",
                spacing,
            )) {
                p class="text-sm text-surface-500 dark:text-surface-400" {
                    "No projects yet. Add your first project in the " (studio_link(site)) "."
                }
            }
        } @else {
            div class=(cn!("grid gap-6 sm:grid-cols-2 lg:grid-cols-3", spacing)) {
                @for project in &grid.projects {
                    (project_card(project))
                }
            }
        }
    }
}

pub fn home(grid: &ProjectGrid, site: &SiteConfig) -> Markup {
    page(
        &PageMeta::default(),
        html! {
            section class="mx-auto max-w-5xl px-6 pb-16 pt-24 md:pb-24 md:pt-32" {
                h1 class=(cn!("text-4xl font-bold tracking-tight md:text-5xl", HEADING)) {
                    "Hey, I\u{2019}m "
                    span class="text-accent-600 dark:text-accent-400" { (site.owner_name) }
                    "."
                }
                p class="mt-4 max-w-xl text-lg leading-relaxed text-surface-600 dark:text-surface-400" {
                    "Designer & developer crafting thoughtful digital experiences. "
                    "Take a look at my recent work below."
                }
            }
            section class="mx-auto max-w-5xl px-6 pb-24" {
                h2 class=(cn!("text-2xl font-semibold tracking-tight", HEADING)) { "Projects" }
                (project_grid(grid, site, "mt-8"))
            }
        },
    )
}

pub fn projects_index(grid: &ProjectGrid, site: &SiteConfig) -> Markup {
    page(
        &PageMeta::titled("Projects"),
        html! {
            section class="mx-auto max-w-5xl px-6 pb-24 pt-16 md:pt-24" {
                h1 class=(cn!("text-3xl font-bold tracking-tight md:text-4xl", HEADING)) { "Projects" }
                p class="mt-4 max-w-xl text-base leading-relaxed text-surface-600 dark:text-surface-400" {
                    "A collection of selected work. Click any project to learn more."
                }
                (project_grid(grid, site, "mt-10"))
            }
        },
    )
}

pub fn project_detail(detail: &ProjectDetail) -> Markup {
    let project = &detail.project;
    let alt = project
        .image
        .as_ref()
        .and_then(|image| image.alt.as_deref())
        .unwrap_or(&project.title);

    page(
        &detail.meta,
        html! {
            article class="mx-auto max-w-3xl px-6 pb-24 pt-16 md:pt-24" {
                a href="/" class=(cn!(
                    "inline-flex items-center gap-1 text-sm font-medium",
                    "text-surface-500 hover:text-surface-900",
                    "dark:text-surface-400 dark:hover:text-surface-50",
                )) {
                    (icons::arrow_left("h-4 w-4"))
                    "Back"
                }

                h1 class=(cn!("mt-8 text-3xl font-bold tracking-tight md:text-4xl", HEADING)) {
                    (project.title)
                }

                @if !project.tags.is_empty() {
                    div class="mt-4" { (tags(&project.tags)) }
                }

                @if let Some(published) = &detail.published {
                    p class="mt-4 text-sm text-surface-500 dark:text-surface-400" {
                        time datetime=[project.created_at.as_deref()] { (published) }
                    }
                }

                @if let Some(description) = project.description() {
                    p class="mt-6 text-lg leading-relaxed text-surface-600 dark:text-surface-400" {
                        (description)
                    }
                }

                @if let Some(src) = &detail.image_url {
                    img src=(src) alt=(alt) loading="lazy"
                        class="mt-8 w-full rounded-2xl border border-surface-200 dark:border-surface-800";
                }

                @if let Some(url) = project.url().and_then(safe_href) {
                    a href=(url) target="_blank" rel="noopener noreferrer" class=(cn!(
                        "mt-6 inline-flex items-center gap-1.5 text-sm font-medium",
                        "text-accent-600 hover:text-accent-700",
                        "dark:text-accent-400 dark:hover:text-accent-300",
                    )) {
                        "Visit project"
                        (icons::external("h-4 w-4"))
                    }
                }

                @if !project.body.is_empty() {
                    div class=(cn!(
                        "prose mt-12 max-w-none",
                        "prose-headings:text-surface-900 prose-p:text-surface-700 prose-a:text-accent-600",
                        "dark:prose-headings:text-surface-50 dark:prose-p:text-surface-300 dark:prose-a:text-accent-400",
                    )) {
                        (portable_text::render(&project.body))
                    }
                }
            }
        },
    )
}

pub fn about(about: &AboutPage, site: &SiteConfig) -> Markup {
    let links: Vec<(&str, &str)> = about
        .social_links()
        .iter()
        .filter_map(|link| safe_href(&link.url).map(|href| (link.platform.as_str(), href)))
        .collect();

    page(
        &PageMeta::titled("About"),
        html! {
            section class="mx-auto max-w-3xl px-6 pb-24 pt-16 md:pt-24" {
                h1 class=(cn!("text-3xl font-bold tracking-tight md:text-4xl", HEADING)) { "About" }

                div class="mt-8 space-y-6 text-base leading-relaxed text-surface-700 dark:text-surface-300" {
                    @if let Some(bio) = about.bio() {
                        p { (bio) }
                    } @else {
                        p {
                            "Welcome! I\u{2019}m a designer and developer who loves building polished, "
                            "accessible digital products. I focus on clean interfaces, thoughtful "
                            "interactions, and performance."
                        }
                        p {
                            "This portfolio is powered by Sanity CMS. Head over to the "
                            (studio_link(site))
                            " to customize the site settings and add your own bio."
                        }
                    }
                }

                @if !links.is_empty() {
                    div class="mt-12" {
                        h2 class=(cn!("text-lg font-semibold", HEADING)) { "Connect" }
                        ul class="mt-4 flex flex-wrap gap-4" {
                            @for (platform, href) in &links {
                                li {
                                    a href=(href) target="_blank" rel="noopener noreferrer" class=(cn!(
                                        "inline-flex items-center gap-1.5 rounded-lg border px-4 py-2 text-sm font-medium",
                                        "border-surface-200 text-surface-700 hover:border-accent-300 hover:text-accent-600",
                                        "dark:border-surface-700 dark:text-surface-300 dark:hover:border-accent-600 dark:hover:text-accent-400",
                                        "transition-colors duration-200",
                                    )) {
                                        (platform)
                                        (icons::external("h-3.5 w-3.5"))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn error_page(title: &str, message: Markup) -> Markup {
    page(
        &PageMeta::titled(title),
        html! {
            section class="mx-auto max-w-3xl px-6 pb-24 pt-24 text-center" {
                h1 class=(cn!("text-3xl font-bold tracking-tight", HEADING)) { (title) }
                p class="mt-4 text-surface-600 dark:text-surface-400" { (message) }
                a href="/" class=(cn!("mt-8 inline-block", INLINE_LINK)) { "Go home" }
            }
        },
    )
}

/// 404 page. `entity` is `"Project"` for unknown slugs; anything else reads
/// as a generic missing page.
pub fn not_found(entity: &str) -> Markup {
    let title = match entity {
        "Project" => "Project not found",
        _ => "Page not found",
    };
    error_page(
        title,
        html! { "The page you\u{2019}re looking for doesn\u{2019}t exist or has been moved." },
    )
}

pub fn bad_request(message: &str) -> Markup {
    error_page("Bad request", html! { (message) })
}

pub fn server_error() -> Markup {
    error_page("Something went wrong", html! { "Please try again in a moment." })
}
