use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::errors::PageError;
use crate::pages::table_or_banner;
use crate::state::AppState;
use crate::table::Table;

#[derive(Debug, Deserialize)]
pub struct MatchesParams {
    pub fetch: Option<bool>,
    #[serde(default, deserialize_with = "crate::pages::empty_string_as_none")]
    pub student_id: Option<i32>,
}

#[derive(Template)]
#[template(path = "matches.html")]
pub struct MatchesTemplate {
    pub student_id: Option<i32>,
    pub fetched: bool,
    pub table: Table,
    pub error: Option<String>,
}

/// GET /matches — postings whose skill requirements the student meets.
pub async fn matches_page(
    State(state): State<AppState>,
    Query(params): Query<MatchesParams>,
) -> Result<Html<String>, PageError> {
    let mut page = MatchesTemplate {
        student_id: params.student_id,
        fetched: false,
        table: Table::default(),
        error: None,
    };

    if params.fetch.unwrap_or(false) {
        page.fetched = true;
        let (table, error) = table_or_banner(
            state.api.matching_job_postings(params.student_id).await,
            "fetching matching job postings",
        );
        page.table = table;
        page.error = error;
    }

    Ok(Html(page.render()?))
}
