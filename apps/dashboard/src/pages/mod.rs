//! Dashboard pages: each page issues at most one API request per user action
//! and renders the decoded rows as a table.

pub mod alumni;
pub mod employers;
pub mod home;
pub mod jobs;
pub mod matches;
pub mod reviews;

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::{ApiError, Row};
use crate::state::AppState;
use crate::table::Table;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/jobs", get(jobs::jobs_page))
        .route("/matches", get(matches::matches_page))
        .route("/reviews", get(reviews::reviews_page))
        .route("/reviews/add", post(reviews::add_review))
        .route("/employers", get(employers::employers_page))
        .route("/alumni", get(alumni::alumni_page))
        .with_state(state)
}

/// HTML forms submit untouched fields as empty strings; treat those as
/// absent instead of failing deserialization.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    use serde::Deserialize;

    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Collapses a fetch result into a table plus an optional error banner.
/// The underlying failure is logged; the page only shows the message.
pub(crate) fn table_or_banner(
    result: Result<Vec<Row>, ApiError>,
    context: &str,
) -> (Table, Option<String>) {
    match result {
        Ok(rows) => (Table::from_rows(&rows), None),
        Err(err) => {
            tracing::error!("{context}: {err}");
            (Table::default(), Some(err.to_string()))
        }
    }
}
