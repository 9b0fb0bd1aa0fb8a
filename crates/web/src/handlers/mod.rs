//! Request handlers.
//!
//! Handlers stay thin: they pick a [`crate::pages::SitePage`], render it
//! against the shared content source and map errors via
//! [`crate::error::AppError`].

pub mod pages;
