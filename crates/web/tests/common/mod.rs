#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use folio_content::queries::{
    PROJECTS_QUERY, PROJECT_BY_SLUG_QUERY, PROJECT_SLUGS_QUERY, SITE_SETTINGS_QUERY, SLUG_PARAM,
};
use folio_content::{ContentError, ContentSource, QueryParams};
use folio_web::config::{ServerConfig, SiteConfig};
use folio_web::router::build_app_router;
use folio_web::state::AppState;

/// In-memory content store answering the site's four queries.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    pub projects: Vec<Value>,
    pub settings: Option<Value>,
    /// Every query fails as if the store were unreachable.
    pub unreachable: bool,
}

impl StaticContent {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn with_project(mut self, project: Value) -> Self {
        self.projects.push(project);
        self
    }

    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[async_trait]
impl ContentSource for StaticContent {
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentError> {
        if self.unreachable {
            return Err(ContentError::Api {
                status: 503,
                body: "unavailable".into(),
            });
        }

        let value = match query {
            q if q == PROJECTS_QUERY => Value::Array(self.projects.clone()),
            q if q == PROJECT_SLUGS_QUERY => self
                .projects
                .iter()
                .map(|p| p["slug"]["current"].clone())
                .collect(),
            q if q == PROJECT_BY_SLUG_QUERY => {
                let slug = params.get(SLUG_PARAM).cloned().unwrap_or(Value::Null);
                self.projects
                    .iter()
                    .find(|p| p["slug"]["current"] == slug)
                    .cloned()
                    .unwrap_or(Value::Null)
            }
            q if q == SITE_SETTINGS_QUERY => self.settings.clone().unwrap_or(Value::Null),
            other => panic!("unexpected query: {other}"),
        };
        Ok(value)
    }
}

/// A project document as the by-slug projection returns it.
pub fn project(slug: &str, title: &str) -> Value {
    json!({
        "_id": format!("project-{slug}"),
        "_createdAt": "2024-01-15T12:00:00Z",
        "title": title,
        "slug": { "_type": "slug", "current": slug },
        "description": format!("About {title}"),
        "tags": ["Rust"],
        "url": null,
        "image": null,
        "body": [
            { "_type": "block", "_key": "b1", "style": "normal",
              "children": [{ "_type": "span", "text": "Body text", "marks": [] }],
              "markDefs": [] }
        ]
    })
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        site: SiteConfig::default(),
    }
}

/// Build the full application router with all middleware layers over
/// `content`.
pub fn build_test_app(content: StaticContent) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        content: Arc::new(content),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
