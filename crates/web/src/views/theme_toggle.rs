//! Dark-mode toggle button and its browser scripts.
//!
//! The scripts are the in-browser counterpart of
//! [`folio_core::theme::ThemeToggle`]. They carry no decisions of their own:
//! the initial-theme resolution, the toggle transition and the labels are
//! computed here from the Rust model and embedded as JSON tables.
//!
//! - [`preference_script`] runs in `<head>` before first paint and turns a
//!   stored preference into an explicit root class.
//! - [`mount_script`] runs at the end of `<body>`, resolves the initial
//!   theme, wires the toggle buttons and the mobile menu.

use std::collections::BTreeMap;

use folio_core::cn;
use folio_core::theme::{
    resolve_initial, PersistError, Theme, ThemeHost, DARK_CLASS, LIGHT_CLASS, THEME_STORAGE_KEY,
};
use maud::{html, Markup};

use super::icons;

const PREFERENCE_SCRIPT: &str = r#"(function () {
  try {
    var stored = window.localStorage.getItem("__KEY__");
    if (stored === "__DARK__" || stored === "__LIGHT__") {
      document.documentElement.classList.add(stored);
    }
  } catch (e) {}
})();"#;

const MOUNT_SCRIPT: &str = r#"(function () {
  var initial = __INITIAL__;
  var next = __NEXT__;
  var labels = __LABELS__;
  var root = document.documentElement;
  var key = (root.classList.contains("__DARK__") ? "1" : "0") +
    (root.classList.contains("__LIGHT__") ? "1" : "0") +
    (window.matchMedia("(prefers-color-scheme: dark)").matches ? "1" : "0");
  var theme = initial[key];
  if (theme === "dark") root.classList.add("__DARK__");

  var toggles = document.querySelectorAll("[data-theme-toggle]");
  function sync() {
    var dark = theme === "dark";
    toggles.forEach(function (button) {
      button.setAttribute("aria-label", labels[theme]);
      button.querySelector("[data-icon=sun]").classList.toggle("hidden", !dark);
      button.querySelector("[data-icon=sun]").classList.toggle("block", dark);
      button.querySelector("[data-icon=moon]").classList.toggle("hidden", dark);
      button.querySelector("[data-icon=moon]").classList.toggle("block", !dark);
    });
  }
  sync();
  toggles.forEach(function (button) {
    button.addEventListener("click", function () {
      theme = next[theme];
      root.classList.toggle("__DARK__", theme === "dark");
      try {
        window.localStorage.setItem("__KEY__", theme);
      } catch (e) {}
      sync();
    });
  });

  var menuButton = document.querySelector("[data-menu-toggle]");
  var menu = document.getElementById("mobile-nav");
  if (menuButton && menu) {
    menuButton.addEventListener("click", function () {
      var open = menu.hasAttribute("hidden");
      if (open) menu.removeAttribute("hidden"); else menu.setAttribute("hidden", "");
      menuButton.setAttribute("aria-expanded", open ? "true" : "false");
      menuButton.querySelector("[data-icon=menu]").classList.toggle("hidden", open);
      menuButton.querySelector("[data-icon=close]").classList.toggle("hidden", !open);
    });
    menu.querySelectorAll("a").forEach(function (link) {
      link.addEventListener("click", function () { menu.setAttribute("hidden", ""); });
    });
  }
})();"#;

const THEMES: [Theme; 2] = [Theme::Light, Theme::Dark];

/// What the mount script can observe about the page before it decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootSnapshot {
    pub dark_class: bool,
    pub light_class: bool,
    pub os_dark: bool,
}

impl RootSnapshot {
    /// All eight observable states.
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..8).map(|bits| Self {
            dark_class: bits & 0b100 != 0,
            light_class: bits & 0b010 != 0,
            os_dark: bits & 0b001 != 0,
        })
    }

    /// Lookup key used by the script: one `0`/`1` per field, in field order.
    pub fn key(&self) -> String {
        [self.dark_class, self.light_class, self.os_dark]
            .iter()
            .map(|&set| if set { '1' } else { '0' })
            .collect()
    }
}

impl ThemeHost for RootSnapshot {
    fn root_has_class(&self, class: &str) -> bool {
        match class {
            DARK_CLASS => self.dark_class,
            LIGHT_CLASS => self.light_class,
            _ => false,
        }
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) {
        match class {
            DARK_CLASS => self.dark_class = enabled,
            LIGHT_CLASS => self.light_class = enabled,
            _ => {}
        }
    }

    fn prefers_dark(&self) -> bool {
        self.os_dark
    }

    fn persist(&mut self, _key: &str, _value: &str) -> Result<(), PersistError> {
        Ok(())
    }
}

/// Initial theme for every observable root state, keyed by [`RootSnapshot::key`].
pub fn initial_theme_table() -> BTreeMap<String, Theme> {
    RootSnapshot::all()
        .map(|snapshot| (snapshot.key(), resolve_initial(&snapshot)))
        .collect()
}

/// Theme after one activation, keyed by the current theme.
pub fn transition_table() -> BTreeMap<Theme, Theme> {
    THEMES.into_iter().map(|theme| (theme, theme.toggled())).collect()
}

/// Toggle button label, keyed by the current theme.
pub fn label_table() -> BTreeMap<Theme, &'static str> {
    THEMES
        .into_iter()
        .map(|theme| (theme, theme.toggle_label()))
        .collect()
}

fn json<T: serde::Serialize>(value: &T) -> String {
    // Maps of strings and unit enums always serialize.
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

fn fill(template: &str) -> String {
    template
        .replace("__INITIAL__", &json(&initial_theme_table()))
        .replace("__NEXT__", &json(&transition_table()))
        .replace("__LABELS__", &json(&label_table()))
        .replace("__KEY__", THEME_STORAGE_KEY)
        .replace("__DARK__", DARK_CLASS)
        .replace("__LIGHT__", LIGHT_CLASS)
}

/// Applies a stored preference as a root class before first paint.
pub fn preference_script() -> String {
    fill(PREFERENCE_SCRIPT)
}

/// Resolves the initial theme and wires toggles and the mobile menu.
pub fn mount_script() -> String {
    fill(MOUNT_SCRIPT)
}

fn visibility(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "hidden"
    }
}

/// The toggle button as rendered for `theme`.
///
/// Pages are rendered without knowing the visitor's preference, so the
/// server passes [`Theme::Light`] and [`mount_script`] corrects the label
/// and icons on mount.
pub fn button(theme: Theme, extra_class: Option<&str>) -> Markup {
    let dark = theme == Theme::Dark;
    html! {
        button type="button" data-theme-toggle="" aria-label=(theme.toggle_label())
            class=(cn!(
                "inline-flex items-center justify-center rounded-lg p-2",
                "text-surface-600 hover:text-surface-900 hover:bg-surface-100",
                "dark:text-surface-400 dark:hover:text-surface-50 dark:hover:bg-surface-800",
                "focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-accent-500",
                extra_class,
            )) {
            // Sun is offered while dark, moon while light.
            (icons::sun(&cn!("h-5 w-5", visibility(dark))))
            (icons::moon(&cn!("h-5 w-5", visibility(!dark))))
        }
    }
}
