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
pub struct AlumniParams {
    pub industry: Option<String>,
}

#[derive(Template)]
#[template(path = "alumni.html")]
pub struct AlumniTemplate {
    pub industry: String,
    pub fetched: bool,
    pub table: Table,
    pub error: Option<String>,
}

/// GET /alumni — alumni working in a given industry.
pub async fn alumni_page(
    State(state): State<AppState>,
    Query(params): Query<AlumniParams>,
) -> Result<Html<String>, PageError> {
    let mut page = AlumniTemplate {
        industry: params.industry.clone().unwrap_or_default(),
        fetched: false,
        table: Table::default(),
        error: None,
    };

    if let Some(industry) = params.industry {
        // Validate locally; a blank industry never reaches the API
        if industry.trim().is_empty() {
            page.error = Some("Please enter an industry.".to_string());
        } else {
            page.fetched = true;
            let (table, error) =
                table_or_banner(state.api.alumni(&industry).await, "fetching alumni");
            page.table = table;
            page.error = error;
        }
    }

    Ok(Html(page.render()?))
}
