use askama::Template;
use axum::response::Html;

use crate::errors::PageError;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// GET /
pub async fn home_page() -> Result<Html<String>, PageError> {
    Ok(Html(HomeTemplate {}.render()?))
}
