use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures a page handler cannot recover from inline.
///
/// Backend errors never end up here: they are caught by the handler and
/// rendered as an error banner inside the page. Only template rendering
/// itself aborts the response.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
