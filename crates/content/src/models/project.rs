use serde::{Deserialize, Serialize};

use super::image::ImageRef;
use super::rich_text::PortableTextBlock;
use super::{non_blank, null_as_default};

/// Slug object as stored by the content store (`{ "current": "..." }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// A portfolio project.
///
/// Required fields: `_id`, `title`, `slug`. Everything else is optional and
/// simply not rendered when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Only populated by the by-slug query.
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: Vec<PortableTextBlock>,
}

impl Project {
    pub fn slug(&self) -> &str {
        &self.slug.current
    }

    /// Site path of this project's detail page.
    pub fn path(&self) -> String {
        format!("/projects/{}", self.slug.current)
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn url(&self) -> Option<&str> {
        non_blank(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_full_projection() {
        let project: Project = serde_json::from_value(json!({
            "_id": "project-1",
            "_createdAt": "2024-01-15T12:00:00Z",
            "title": "My Awesome Project",
            "slug": { "_type": "slug", "current": "my-awesome-project" },
            "description": "A brief description of the project.",
            "tags": ["Rust", "Axum"],
            "url": "https://example.com",
            "image": null,
            "body": [
                { "_type": "block", "_key": "b1", "style": "normal",
                  "children": [{ "_type": "span", "text": "Hello", "marks": [] }],
                  "markDefs": [] }
            ]
        }))
        .unwrap();

        assert_eq!(project.id, "project-1");
        assert_eq!(project.slug(), "my-awesome-project");
        assert_eq!(project.path(), "/projects/my-awesome-project");
        assert_eq!(project.tags, vec!["Rust", "Axum"]);
        assert_eq!(project.url(), Some("https://example.com"));
        assert_eq!(project.body.len(), 1);
        assert!(project.image.is_none());
    }

    #[test]
    fn nulls_from_projection_become_absent() {
        let project: Project = serde_json::from_value(json!({
            "_id": "project-2",
            "title": "Minimal Project",
            "slug": { "current": "minimal-project" },
            "description": null,
            "tags": null,
            "url": null,
            "body": null
        }))
        .unwrap();

        assert_eq!(project.description(), None);
        assert!(project.tags.is_empty());
        assert!(project.body.is_empty());
        assert_eq!(project.created_at, None);
    }

    #[test]
    fn blank_description_is_absent() {
        let project: Project = serde_json::from_value(json!({
            "_id": "p",
            "title": "T",
            "slug": { "current": "t" },
            "description": "   "
        }))
        .unwrap();
        assert_eq!(project.description(), None);
    }

    #[test]
    fn missing_slug_is_rejected() {
        let result = serde_json::from_value::<Project>(json!({
            "_id": "p",
            "title": "No slug"
        }));
        assert!(result.is_err());
    }
}
