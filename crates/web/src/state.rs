use std::sync::Arc;

use folio_content::ContentSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-only handle to the content store.
    pub content: Arc<dyn ContentSource>,
}
