//! Dark-mode toggle state machine.
//!
//! The toggle owns a two-state machine (`Light` / `Dark`). Everything it
//! touches outside itself -- the document root's class list, the OS colour
//! scheme and the persisted preference -- goes through [`ThemeHost`], so the
//! same transitions drive the browser script and the unit tests.

use serde::Serialize;

/// Local storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class on the document root that switches the dark palette on.
pub const DARK_CLASS: &str = "dark";

/// Class on the document root that pins the light palette.
pub const LIGHT_CLASS: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted preference. Anything other than `"dark"` / `"light"`
    /// counts as "no preference".
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Accessible label for the toggle button while this theme is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}

/// Persisting the preference failed (storage full, disabled, sandboxed ...).
#[derive(Debug, thiserror::Error)]
#[error("Theme preference could not be persisted: {0}")]
pub struct PersistError(pub String);

/// The environment a [`ThemeToggle`] runs in.
pub trait ThemeHost {
    /// Whether the document root currently carries `class`.
    fn root_has_class(&self, class: &str) -> bool;

    /// Add (`enabled = true`) or remove `class` on the document root.
    fn set_root_class(&mut self, class: &str, enabled: bool);

    /// The operating system's reported colour-scheme preference.
    fn prefers_dark(&self) -> bool;

    /// Store `value` under `key`.
    fn persist(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// Decide the theme on first mount.
///
/// 1. an explicit `dark` class on the root wins;
/// 2. otherwise, unless an explicit `light` class pins it, follow the OS;
/// 3. otherwise light.
pub fn resolve_initial(host: &impl ThemeHost) -> Theme {
    if host.root_has_class(DARK_CLASS) {
        return Theme::Dark;
    }
    if !host.root_has_class(LIGHT_CLASS) && host.prefers_dark() {
        return Theme::Dark;
    }
    Theme::Light
}

/// A mounted dark-mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    theme: Theme,
}

impl ThemeToggle {
    /// Resolve the initial theme and make the root class agree with it.
    pub fn mount(host: &mut impl ThemeHost) -> Self {
        let theme = resolve_initial(host);
        if theme == Theme::Dark {
            host.set_root_class(DARK_CLASS, true);
        }
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn aria_label(&self) -> &'static str {
        self.theme.toggle_label()
    }

    /// Flip the theme in response to a user activation.
    ///
    /// Persistence is fire-and-forget: a failed write leaves the new theme
    /// in effect for this page and is not retried.
    pub fn activate(&mut self, host: &mut impl ThemeHost) -> Theme {
        let next = self.theme.toggled();
        self.theme = next;
        host.set_root_class(DARK_CLASS, next == Theme::Dark);
        let _ = host.persist(THEME_STORAGE_KEY, next.as_str());
        next
    }
}
