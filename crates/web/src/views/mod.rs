//! Presentation components rendered with [`maud`].
//!
//! Components are stateless functions from view models to [`maud::Markup`].
//! The only client-side behaviour (dark-mode toggle, mobile menu) ships as
//! small inline scripts from [`theme_toggle`].

pub mod footer;
pub mod header;
pub mod icons;
pub mod layout;
pub mod links;
pub mod pages;
pub mod portable_text;
pub mod project_card;
pub mod theme_toggle;

/// Brand shown in the header and appended to every document title.
pub const SITE_BRAND: &str = "Portfolio";
