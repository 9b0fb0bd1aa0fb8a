//! Folio core library.
//!
//! Pure building blocks used by the web crate: the domain
//! error type, text utilities (slugs, dates, class-name merging) and the
//! dark-mode state machine.

pub mod class_names;
pub mod dates;
pub mod error;
pub mod slug;
pub mod theme;
