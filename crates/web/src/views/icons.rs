//! Inline SVG icons (24x24 outline set).

use maud::{html, Markup};

const ARROW_RIGHT: &str = "M13.5 4.5 21 12m0 0-7.5 7.5M21 12H3";
const ARROW_LEFT: &str = "M10.5 19.5 3 12m0 0 7.5-7.5M3 12h18";
const EXTERNAL: &str = "M13.5 6H5.25A2.25 2.25 0 0 0 3 8.25v10.5A2.25 2.25 0 0 0 5.25 21h10.5A2.25 2.25 0 0 0 18 18.75V10.5m-10.5 6L21 3m0 0h-5.25M21 3v5.25";
const SUN: &str = "M12 3v2.25m6.364.386-1.591 1.591M21 12h-2.25m-.386 6.364-1.591-1.591M12 18.75V21m-4.773-4.227-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 1 1-7.5 0 3.75 3.75 0 0 1 7.5 0Z";
const MOON: &str = "M21.752 15.002A9.72 9.72 0 0 1 18 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 0 0 3 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 0 0 9.002-5.998Z";
const MENU: &str = "M3.75 9h16.5m-16.5 6.75h16.5";
const CLOSE: &str = "M6 18 18 6M6 6l12 12";

fn outline(class: &str, stroke_width: &str, name: &str, shape: &str) -> Markup {
    html! {
        svg class=(class) data-icon=(name) fill="none" viewBox="0 0 24 24"
            stroke-width=(stroke_width) stroke="currentColor" aria-hidden="true" {
            path stroke-linecap="round" stroke-linejoin="round" d=(shape) {}
        }
    }
}

pub fn arrow_right(class: &str) -> Markup {
    outline(class, "2", "arrow-right", ARROW_RIGHT)
}

pub fn arrow_left(class: &str) -> Markup {
    outline(class, "2", "arrow-left", ARROW_LEFT)
}

pub fn external(class: &str) -> Markup {
    outline(class, "2", "external", EXTERNAL)
}

pub fn sun(class: &str) -> Markup {
    outline(class, "1.5", "sun", SUN)
}

pub fn moon(class: &str) -> Markup {
    outline(class, "1.5", "moon", MOON)
}

pub fn menu(class: &str) -> Markup {
    outline(class, "1.5", "menu", MENU)
}

pub fn close(class: &str) -> Markup {
    outline(class, "1.5", "close", CLOSE)
}
