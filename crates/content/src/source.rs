//! The content source seam.
//!
//! Everything above this layer talks to a `dyn ContentSource`, so the HTTP
//! client can be replaced by an in-memory source in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ContentError;
use crate::models::ImageRef;

/// Named parameters bound into a query (`$name` in GROQ).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` (without the `$`) to `value`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A read-only store answering GROQ queries with raw JSON.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run `query` with `params` and return the query's `result` value.
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentError>;

    /// Public URL for an image field, when the source can resolve one.
    fn image_url(&self, _image: &ImageRef) -> Option<String> {
        None
    }
}

/// Run a query and decode its result. A `null` result is `Ok(None)`.
pub async fn fetch<T: DeserializeOwned>(
    source: &dyn ContentSource,
    query: &str,
    params: &QueryParams,
) -> Result<Option<T>, ContentError> {
    let value = source.query(query, params).await?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

/// Run a query whose result is a list and decode each element on its own.
///
/// Elements that do not decode (drafts missing a title, a slug set to
/// `null`) are skipped with a warning instead of failing the whole list. A
/// `null` result is `Ok(None)`; a result that is not a list is a decode error.
pub async fn fetch_each<T: DeserializeOwned>(
    source: &dyn ContentSource,
    query: &str,
    params: &QueryParams,
) -> Result<Option<Vec<T>>, ContentError> {
    let Some(items) = fetch::<Vec<Value>>(source, query, params).await? else {
        return Ok(None);
    };

    let decoded = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let id = item.get("_id").and_then(Value::as_str).map(str::to_owned);
            match serde_json::from_value(item) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!(index, id = ?id, error = %err, "Skipping undecodable list entry");
                    None
                }
            }
        })
        .collect();
    Ok(Some(decoded))
}

/// Outcome of a read: a value, nothing, or a failure.
///
/// Pages treat `Absent` and `Failed` identically (render the fallback); the
/// distinction exists so failures can be logged.
#[derive(Debug)]
pub enum Fetched<T> {
    Found(T),
    Absent,
    Failed(ContentError),
}

impl<T> Fetched<T> {
    /// Collapse to an `Option`, logging a failure against `context`.
    pub fn into_option(self, context: &'static str) -> Option<T> {
        match self {
            Fetched::Found(value) => Some(value),
            Fetched::Absent => None,
            Fetched::Failed(err) => {
                tracing::warn!(context, error = %err, "Content fetch failed, rendering fallback");
                None
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }
}

impl<T> From<Result<Option<T>, ContentError>> for Fetched<T> {
    fn from(result: Result<Option<T>, ContentError>) -> Self {
        match result {
            Ok(Some(value)) => Fetched::Found(value),
            Ok(None) => Fetched::Absent,
            Err(err) => Fetched::Failed(err),
        }
    }
}
