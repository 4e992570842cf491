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
pub struct EmployersParams {
    #[serde(default, deserialize_with = "crate::pages::empty_string_as_none")]
    pub job_id: Option<i32>,
    pub ranking: Option<bool>,
}

#[derive(Template)]
#[template(path = "employers.html")]
pub struct EmployersTemplate {
    pub job_id: Option<i32>,
    pub info_fetched: bool,
    pub info_table: Table,
    pub info_error: Option<String>,
    pub rank_fetched: bool,
    pub rank_table: Table,
    pub rank_error: Option<String>,
}

/// GET /employers — company lookup per posting, and the alumni-count ranking.
/// Each form on the page triggers exactly one of the two API calls.
pub async fn employers_page(
    State(state): State<AppState>,
    Query(params): Query<EmployersParams>,
) -> Result<Html<String>, PageError> {
    let mut page = EmployersTemplate {
        job_id: params.job_id,
        info_fetched: false,
        info_table: Table::default(),
        info_error: None,
        rank_fetched: false,
        rank_table: Table::default(),
        rank_error: None,
    };

    if let Some(job_id) = params.job_id {
        page.info_fetched = true;
        let (table, error) = table_or_banner(
            state.api.employer_info(job_id).await,
            "fetching company information",
        );
        page.info_table = table;
        page.info_error = error;
    }

    if params.ranking.unwrap_or(false) {
        page.rank_fetched = true;
        let (table, error) = table_or_banner(
            state.api.employer_alumni_number().await,
            "fetching employer alumni counts",
        );
        page.rank_table = table;
        page.rank_error = error;
    }

    Ok(Html(page.render()?))
}
