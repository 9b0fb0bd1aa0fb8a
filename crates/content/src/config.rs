use crate::error::ContentError;

/// Content store connection settings loaded from environment variables.
///
/// A missing project id is not fatal: the client is still built, every
/// query fails with [`ContentError::Config`], and pages render their
/// fallback copy.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Sanity project id (`SANITY_PROJECT_ID`).
    pub project_id: Option<String>,
    /// Dataset name (default: `production`).
    pub dataset: String,
    /// Dated API version, without the leading `v` (default: `2024-01-01`).
    pub api_version: String,
    /// Query the edge cache instead of the live API (default: `true`).
    pub use_cdn: bool,
    /// Optional read token sent as a bearer credential.
    pub token: Option<String>,
    /// Overrides the computed API origin, e.g. `http://127.0.0.1:4010`.
    pub api_host: Option<String>,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn: true,
            token: None,
            api_host: None,
            timeout_secs: 10,
        }
    }
}

impl ContentConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default       |
    /// |-------------------------|---------------|
    /// | `SANITY_PROJECT_ID`     | *(unset)*     |
    /// | `SANITY_DATASET`        | `production`  |
    /// | `SANITY_API_VERSION`    | `2024-01-01`  |
    /// | `SANITY_USE_CDN`        | `true`        |
    /// | `SANITY_API_TOKEN`      | *(unset)*     |
    /// | `SANITY_API_HOST`       | *(computed)*  |
    /// | `SANITY_TIMEOUT_SECS`   | `10`          |
    pub fn from_env() -> Result<Self, ContentError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ContentError> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let use_cdn = match non_empty("SANITY_USE_CDN") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ContentError::Config(format!("SANITY_USE_CDN must be true or false, got {raw:?}"))
            })?,
            None => defaults.use_cdn,
        };

        let timeout_secs = match non_empty("SANITY_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ContentError::Config(format!("SANITY_TIMEOUT_SECS must be a valid u64, got {raw:?}"))
            })?,
            None => defaults.timeout_secs,
        };

        let api_version = non_empty("SANITY_API_VERSION")
            .map(|v| v.trim().trim_start_matches('v').to_string())
            .unwrap_or(defaults.api_version);

        Ok(Self {
            project_id: non_empty("SANITY_PROJECT_ID"),
            dataset: non_empty("SANITY_DATASET").unwrap_or(defaults.dataset),
            api_version,
            use_cdn,
            token: non_empty("SANITY_API_TOKEN"),
            api_host: non_empty("SANITY_API_HOST").map(|h| h.trim_end_matches('/').to_string()),
            timeout_secs,
        })
    }

    /// Origin the query API is served from.
    pub fn api_origin(&self) -> Result<String, ContentError> {
        if let Some(host) = &self.api_host {
            return Ok(host.clone());
        }
        let project_id = self
            .project_id
            .as_deref()
            .ok_or_else(|| ContentError::Config("SANITY_PROJECT_ID is not set".into()))?;
        let subdomain = if self.use_cdn { "apicdn" } else { "api" };
        Ok(format!("https://{project_id}.{subdomain}.sanity.io"))
    }

    /// Full URL of the query endpoint for the configured dataset.
    pub fn query_url(&self) -> Result<String, ContentError> {
        Ok(format!(
            "{}/v{}/data/query/{}",
            self.api_origin()?,
            self.api_version,
            self.dataset
        ))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ContentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.project_id, None);
        assert_eq!(config.dataset, "production");
        assert_eq!(config.api_version, "2024-01-01");
        assert!(config.use_cdn);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn cdn_origin() {
        let config =
            ContentConfig::from_lookup(lookup(&[("SANITY_PROJECT_ID", "abc123")])).unwrap();
        assert_eq!(
            config.query_url().unwrap(),
            "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn live_origin_and_custom_dataset() {
        let config = ContentConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_USE_CDN", "false"),
            ("SANITY_DATASET", "staging"),
            ("SANITY_API_VERSION", "v2025-02-19"),
        ]))
        .unwrap();
        assert_eq!(
            config.query_url().unwrap(),
            "https://abc123.api.sanity.io/v2025-02-19/data/query/staging"
        );
    }

    #[test]
    fn host_override_wins() {
        let config =
            ContentConfig::from_lookup(lookup(&[("SANITY_API_HOST", "http://127.0.0.1:4010/")]))
                .unwrap();
        assert_eq!(
            config.query_url().unwrap(),
            "http://127.0.0.1:4010/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn missing_project_is_a_config_error() {
        let config = ContentConfig::default();
        assert_matches!(config.query_url(), Err(ContentError::Config(_)));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            ContentConfig::from_lookup(lookup(&[("SANITY_PROJECT_ID", "  ")])).unwrap();
        assert_eq!(config.project_id, None);
    }

    #[test]
    fn invalid_bool_rejected() {
        let result = ContentConfig::from_lookup(lookup(&[("SANITY_USE_CDN", "maybe")]));
        assert_matches!(result, Err(ContentError::Config(_)));
    }

    #[test]
    fn invalid_timeout_rejected() {
        let result = ContentConfig::from_lookup(lookup(&[("SANITY_TIMEOUT_SECS", "soon")]));
        assert_matches!(result, Err(ContentError::Config(_)));
    }
}
