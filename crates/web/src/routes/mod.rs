pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// GET /                  -> home
/// GET /projects          -> projects_index
/// GET /projects/{slug}   -> project_detail
/// GET /about             -> about
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/projects", get(handlers::pages::projects_index))
        .route("/projects/{slug}", get(handlers::pages::project_detail))
        .route("/about", get(handlers::pages::about))
}
