use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::error::AppResult;
use crate::pages::SitePage;
use crate::state::AppState;
use crate::views;

async fn render(state: &AppState, page: SitePage) -> AppResult<Html<String>> {
    let markup = page
        .render(state.content.as_ref(), &state.config.site)
        .await?;
    Ok(Html(markup.into_string()))
}

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, SitePage::Home).await
}

/// GET /projects
pub async fn projects_index(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, SitePage::Projects).await
}

/// GET /projects/{slug}
///
/// 404 when no project has `slug`, or when the content store is unreachable.
pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Html<String>> {
    render(&state, SitePage::ProjectDetail(slug)).await
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, SitePage::About).await
}

/// Fallback for every unmatched route.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(views::pages::not_found("Page").into_string()),
    )
}
