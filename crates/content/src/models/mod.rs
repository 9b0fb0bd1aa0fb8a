//! View models projected from content store documents.
//!
//! GROQ projections emit `null` for fields a document does not have, so
//! collection fields decode `null` as empty rather than failing.

pub mod image;
pub mod project;
pub mod rich_text;
pub mod settings;

pub use image::{ImageAsset, ImageRef};
pub use project::{Project, Slug};
pub use rich_text::{MarkDef, PortableTextBlock, Span};
pub use settings::{SiteSettings, SocialLink};

use serde::{Deserialize, Deserializer};

/// Decode a missing or `null` value as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat an empty or whitespace-only string the same as an absent one.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
