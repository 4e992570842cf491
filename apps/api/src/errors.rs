use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// 404, reported under a `message` body key.
    #[error("{0}")]
    NotFound(String),

    /// 404, reported under an `error` body key (the employer-info lookup
    /// answers with this shape).
    #[error("{0}")]
    NotFoundError(String),

    /// 400, reported under an `error` body key.
    #[error("{0}")]
    Validation(String),

    /// Any connection or query failure. The client sees only the generic
    /// message documented for the endpoint; the source error is logged
    /// server-side.
    #[error("{context}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Wraps a query failure with the endpoint's documented generic message,
    /// for use with `map_err`.
    pub fn db(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Database { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Database { context, source } => {
                tracing::error!("{context}: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": context }))
            }
        };

        (status, Json(body)).into_response()
    }
}
