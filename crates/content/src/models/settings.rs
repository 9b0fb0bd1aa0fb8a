use serde::{Deserialize, Serialize};

use super::{non_blank, null_as_default};

/// One entry of the settings document's social links list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(rename = "_key")]
    pub key: String,
    pub platform: String,
    pub url: String,
}

/// The singleton site settings document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "socialLinks", default, deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
}

impl SiteSettings {
    /// The author bio, if one has been written.
    pub fn bio(&self) -> Option<&str> {
        non_blank(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_settings_with_links() {
        let settings: SiteSettings = serde_json::from_value(json!({
            "_id": "siteSettings",
            "name": "Jeff",
            "title": "Portfolio",
            "description": "I build things.",
            "socialLinks": [
                { "_key": "gh", "platform": "GitHub", "url": "https://github.com/jeff" },
                { "_key": "mastodon", "platform": "Mastodon", "url": "https://hachyderm.io/@jeff" }
            ]
        }))
        .unwrap();

        assert_eq!(settings.bio(), Some("I build things."));
        assert_eq!(settings.social_links.len(), 2);
        assert_eq!(settings.social_links[0].key, "gh");
        assert_eq!(settings.social_links[1].platform, "Mastodon");
    }

    #[test]
    fn null_links_and_description() {
        let settings: SiteSettings = serde_json::from_value(json!({
            "_id": "siteSettings",
            "name": null,
            "title": "Portfolio",
            "description": null,
            "socialLinks": null
        }))
        .unwrap();

        assert_eq!(settings.bio(), None);
        assert!(settings.social_links.is_empty());
        assert_eq!(settings.name, "");
    }
}
