//! Image references and CDN URL resolution.
//!
//! Documents reference uploaded images by asset id, e.g.
//! `image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg`. The id encodes the
//! dimensions and format, which is all that is needed to build the CDN URL.

use serde::{Deserialize, Serialize};

const CDN_ORIGIN: &str = "https://cdn.sanity.io";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetReference {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// Focal area chosen by the editor, as fractions of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// An image field on a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub asset: AssetReference,
    #[serde(default)]
    pub hotspot: Option<Hotspot>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Decoded parts of an image asset id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

impl ImageAsset {
    /// Parse `image-<id>-<W>x<H>-<format>`. Returns `None` for anything else.
    pub fn parse(reference: &str) -> Option<Self> {
        let rest = reference.strip_prefix("image-")?;
        let mut parts = rest.rsplitn(3, '-');
        let format = parts.next()?;
        let dimensions = parts.next()?;
        let id = parts.next()?;

        let (width, height) = dimensions.split_once('x')?;
        if id.is_empty() || format.is_empty() {
            return None;
        }

        Some(Self {
            id: id.to_string(),
            width: width.parse().ok()?,
            height: height.parse().ok()?,
            format: format.to_string(),
        })
    }

    /// CDN URL of the original upload.
    pub fn cdn_url(&self, project_id: &str, dataset: &str) -> String {
        format!(
            "{CDN_ORIGIN}/images/{project_id}/{dataset}/{}-{}x{}.{}",
            self.id, self.width, self.height, self.format
        )
    }
}

impl ImageRef {
    pub fn asset(&self) -> Option<ImageAsset> {
        ImageAsset::parse(&self.asset.reference)
    }
}
