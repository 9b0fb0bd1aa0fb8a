use std::any::Any;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use folio_core::error::CoreError;

use crate::views;

/// Application-level error type for page handlers.
///
/// Content store failures never reach this type: composers swallow them and
/// render fallbacks. What remains is "this page does not exist". Implements
/// [`IntoResponse`] to produce an HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, markup) = match &self {
            AppError::Core(CoreError::NotFound { entity, key }) => {
                tracing::debug!(entity, key = %key, "Page not found");
                (StatusCode::NOT_FOUND, views::pages::not_found(entity))
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, views::pages::bad_request(msg))
            }
        };

        (status, Html(markup.into_string())).into_response()
    }
}

/// Response for a handler that panicked; installed on the `CatchPanicLayer`.
///
/// The panic payload is logged, never rendered.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    tracing::error!(error = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::pages::server_error().into_string()),
    )
        .into_response()
}
