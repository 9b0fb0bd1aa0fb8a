/// Invalid value for a configuration variable.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Copy and links that vary per deployment.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Name shown in the home page hero (default: `Jeff`).
    pub owner_name: String,
    /// Where the "add content" placeholders link to (default: `/studio`).
    pub studio_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Jeff".into(),
            studio_url: "/studio".into(),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for in-flight requests on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default      |
    /// |------------------------|--------------|
    /// | `HOST`                 | `0.0.0.0`    |
    /// | `PORT`                 | `3000`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`         |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`         |
    /// | `SITE_OWNER`           | `Jeff`       |
    /// | `STUDIO_URL`           | `/studio`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let site_defaults = SiteConfig::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_var(&lookup, "PORT", 3000, "a valid u16")?,
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "a valid u64")?,
            shutdown_timeout_secs: parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30, "a valid u64")?,
            site: SiteConfig {
                owner_name: lookup("SITE_OWNER").unwrap_or(site_defaults.owner_name),
                studio_url: lookup("STUDIO_URL").unwrap_or(site_defaults.studio_url),
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
        None => Ok(default),
    }
}
