//! HTTP client for the content store's query API.
//!
//! Issues `GET /v{version}/data/query/{dataset}?query=...&$param=...` with
//! [`reqwest`] and unwraps the `{ "result": ... }` envelope.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ContentConfig;
use crate::error::ContentError;
use crate::models::ImageRef;
use crate::source::{ContentSource, QueryParams};

/// Configured handle to the remote content store.
pub struct ContentClient {
    client: reqwest::Client,
    config: ContentConfig,
}

/// Envelope returned by the query endpoint.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
    /// Server-side execution time in milliseconds.
    #[serde(default)]
    ms: Option<u64>,
}

impl ContentClient {
    /// Build a client with its own connection pool and request timeout.
    pub fn new(config: ContentConfig) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// Encode the query and its parameters as URL query pairs.
    ///
    /// Parameter values are JSON-encoded, so a string slug travels as
    /// `$slug="my-project"`.
    fn query_pairs(query: &str, params: &QueryParams) -> Result<Vec<(String, String)>, ContentError> {
        let mut pairs = Vec::with_capacity(params.iter().count() + 1);
        pairs.push(("query".to_string(), query.trim().to_string()));
        for (name, value) in params.iter() {
            pairs.push((format!("${name}"), serde_json::to_string(value)?));
        }
        Ok(pairs)
    }

    /// Ensure the response has a success status code, otherwise capture the
    /// status and body text as [`ContentError::Api`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ContentError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ContentError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentError> {
        let url = self.config.query_url()?;
        let pairs = Self::query_pairs(query, params)?;

        let mut request = self.client.get(&url).query(&pairs);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let started = Instant::now();
        let response = Self::ensure_success(request.send().await?).await?;
        let bytes = response.bytes().await?;
        let envelope: QueryResponse = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            dataset = %self.config.dataset,
            elapsed_ms = started.elapsed().as_millis() as u64,
            server_ms = envelope.ms,
            "Content query completed",
        );

        Ok(envelope.result)
    }

    fn image_url(&self, image: &ImageRef) -> Option<String> {
        let project_id = self.config.project_id.as_deref()?;
        let asset = image.asset()?;
        Some(asset.cdn_url(project_id, &self.config.dataset))
    }
}
