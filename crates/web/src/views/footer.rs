use maud::{html, Markup};

pub fn site_footer(year: i32) -> Markup {
    html! {
        footer class="border-t border-surface-200 dark:border-surface-800" {
            div class="mx-auto flex max-w-5xl items-center justify-center px-6 py-8" {
                p class="text-sm text-surface-500 dark:text-surface-400" {
                    "© " (year) " All rights reserved."
                }
            }
        }
    }
}
