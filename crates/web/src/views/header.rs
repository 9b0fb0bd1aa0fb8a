//! Site header: brand, primary navigation, theme toggle, mobile menu.

use folio_core::theme::Theme;
use maud::{html, Markup};

use super::{icons, theme_toggle, SITE_BRAND};

/// Primary navigation as `(label, href)`, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[("Home", "/"), ("Projects", "/projects"), ("About", "/about")];

const LINK_CLASS: &str = "rounded-lg px-3 py-2 text-sm font-medium text-surface-600 \
    hover:text-surface-900 hover:bg-surface-100 dark:text-surface-400 \
    dark:hover:text-surface-50 dark:hover:bg-surface-800";

pub fn site_header() -> Markup {
    html! {
        header class="sticky top-0 z-40 border-b border-surface-200 bg-white/80 backdrop-blur-md dark:border-surface-800 dark:bg-surface-950/80" {
            div class="mx-auto flex h-16 max-w-5xl items-center justify-between px-6" {
                a href="/" class="text-lg font-semibold tracking-tight text-surface-900 dark:text-surface-50" {
                    (SITE_BRAND)
                }

                nav class="hidden items-center gap-1 md:flex" aria-label="Primary" {
                    @for (label, href) in NAV_LINKS {
                        a href=(href) class=(LINK_CLASS) { (label) }
                    }
                    (theme_toggle::button(Theme::Light, Some("ml-2")))
                }

                div class="flex items-center gap-1 md:hidden" {
                    (theme_toggle::button(Theme::Light, None))
                    button type="button" data-menu-toggle="" aria-controls="mobile-nav"
                        aria-expanded="false" aria-label="Toggle menu"
                        class="inline-flex items-center justify-center rounded-lg p-2 text-surface-600 hover:bg-surface-100 dark:text-surface-400 dark:hover:bg-surface-800" {
                        (icons::menu("h-6 w-6 block"))
                        (icons::close("h-6 w-6 hidden"))
                    }
                }
            }

            nav id="mobile-nav" hidden class="border-t border-surface-200 px-6 py-3 md:hidden dark:border-surface-800" aria-label="Mobile" {
                ul class="flex flex-col gap-1" {
                    @for (label, href) in NAV_LINKS {
                        li { a href=(href) class=(LINK_CLASS) { (label) } }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_in_order() {
        let html = site_header().into_string();
        let home = html.find(r#"href="/""#).unwrap();
        let projects = html.find(r#"href="/projects""#).unwrap();
        let about = html.find(r#"href="/about""#).unwrap();
        assert!(home < projects && projects < about);
    }

    #[test]
    fn has_toggle_and_collapsed_menu() {
        let html = site_header().into_string();
        assert_eq!(html.matches("data-theme-toggle").count(), 2);
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"id="mobile-nav" hidden"#));
        assert!(html.contains(">Portfolio</a>"));
    }
}
