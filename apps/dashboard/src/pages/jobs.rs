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
pub struct JobsParams {
    pub fetch: Option<bool>,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsTemplate {
    pub fetched: bool,
    pub table: Table,
    pub error: Option<String>,
}

/// GET /jobs — all postings with their application counts.
pub async fn jobs_page(
    State(state): State<AppState>,
    Query(params): Query<JobsParams>,
) -> Result<Html<String>, PageError> {
    let mut page = JobsTemplate {
        fetched: false,
        table: Table::default(),
        error: None,
    };

    if params.fetch.unwrap_or(false) {
        page.fetched = true;
        let (table, error) =
            table_or_banner(state.api.job_postings().await, "fetching job postings");
        page.table = table;
        page.error = error;
    }

    Ok(Html(page.render()?))
}
