use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::errors::PageError;
use crate::pages::table_or_banner;
use crate::state::AppState;
use crate::table::Table;

#[derive(Debug, Deserialize)]
pub struct ReviewsParams {
    #[serde(default, deserialize_with = "crate::pages::empty_string_as_none")]
    pub job_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AddReviewForm {
    #[serde(default, deserialize_with = "crate::pages::empty_string_as_none")]
    pub employer_id: Option<i32>,
    pub review: String,
}

#[derive(Template)]
#[template(path = "reviews.html")]
pub struct ReviewsTemplate {
    pub job_id: Option<i32>,
    pub fetched: bool,
    pub table: Table,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl ReviewsTemplate {
    fn empty() -> Self {
        ReviewsTemplate {
            job_id: None,
            fetched: false,
            table: Table::default(),
            error: None,
            notice: None,
        }
    }
}

/// GET /reviews — look up employer reviews for a specific posting.
pub async fn reviews_page(
    State(state): State<AppState>,
    Query(params): Query<ReviewsParams>,
) -> Result<Html<String>, PageError> {
    let mut page = ReviewsTemplate::empty();

    if let Some(job_id) = params.job_id {
        page.job_id = Some(job_id);
        page.fetched = true;
        let (table, error) = table_or_banner(
            state.api.job_reviews(job_id).await,
            "fetching employer reviews",
        );
        page.table = table;
        page.error = error;
    }

    Ok(Html(page.render()?))
}

/// POST /reviews/add — submit a new review about an employer.
pub async fn add_review(
    State(state): State<AppState>,
    Form(form): Form<AddReviewForm>,
) -> Result<Html<String>, PageError> {
    let mut page = ReviewsTemplate::empty();

    let Some(employer_id) = form.employer_id else {
        page.error = Some("Please fill in all fields.".to_string());
        return Ok(Html(page.render()?));
    };
    if form.review.trim().is_empty() {
        page.error = Some("Please fill in all fields.".to_string());
        return Ok(Html(page.render()?));
    }

    match state.api.add_employer_review(employer_id, &form.review).await {
        Ok(record) => {
            page.notice = Some(
                "Review added successfully! Make note of the Review ID to change or delete it later."
                    .to_string(),
            );
            page.fetched = true;
            page.table = Table::from_record(&record);
        }
        Err(err) => {
            tracing::error!("adding employer review: {err}");
            page.error = Some(err.to_string());
        }
    }

    Ok(Html(page.render()?))
}
