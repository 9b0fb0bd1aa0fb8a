//! Portable text: the block-based rich text format used for project bodies.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// An inline run of text with the marks applied to it.
///
/// A mark is either a decorator name (`strong`, `em`, `code` ...) or the
/// `_key` of an entry in the enclosing block's `markDefs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "_type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marks: Vec<String>,
}

/// An annotation referenced from span marks, typically a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// One top-level entry of a portable text document.
///
/// Only `_type == "block"` entries carry text; other types (embedded images,
/// code blocks from plugins) decode with empty children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableTextBlock {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_key", default)]
    pub key: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(rename = "listItem", default)]
    pub list_item: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Span>,
    #[serde(rename = "markDefs", default, deserialize_with = "null_as_default")]
    pub mark_defs: Vec<MarkDef>,
}

impl PortableTextBlock {
    pub fn is_text_block(&self) -> bool {
        self.kind == "block"
    }

    /// Block style, defaulting to `normal`.
    pub fn style(&self) -> &str {
        self.style.as_deref().unwrap_or("normal")
    }

    pub fn mark_def(&self, key: &str) -> Option<&MarkDef> {
        self.mark_defs.iter().find(|def| def.key == key)
    }

    /// Concatenated text of all spans.
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }
}
