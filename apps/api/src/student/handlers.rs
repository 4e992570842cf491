use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::student::{
    AlumnusRow, EmployerAlumniRow, EmployerInfoRow, EmployerReviewRow, JobPostingRow,
    JobReviewRow, SkillMatchRow,
};
use crate::state::AppState;
use crate::student::queries;

#[derive(Debug, Deserialize)]
pub struct MatchingParams {
    /// Student whose skills drive the match. Defaults to student 1, the
    /// behavior callers of the unparameterized route relied on.
    pub student_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AddReviewInput {
    #[serde(rename = "employerId")]
    pub employer_id: i32,
    pub review: String,
}

/// GET /student/job_postings
pub async fn job_postings(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPostingRow>>, AppError> {
    let rows = queries::job_postings_with_counts(&state.db)
        .await
        .map_err(AppError::db("Failed to fetch jobs"))?;
    Ok(Json(rows))
}

/// GET /student/matching_job_postings?student_id=N
pub async fn matching_job_postings(
    State(state): State<AppState>,
    Query(params): Query<MatchingParams>,
) -> Result<Json<Vec<SkillMatchRow>>, AppError> {
    let student_id = params.student_id.unwrap_or(1);
    let rows = queries::matching_job_postings(&state.db, student_id)
        .await
        .map_err(AppError::db("Failed to fetch matching jobs"))?;
    Ok(Json(rows))
}

/// GET /student/job_reviews/:job_id
pub async fn job_reviews(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Json<Vec<JobReviewRow>>, AppError> {
    let rows = queries::job_reviews(&state.db, job_id)
        .await
        .map_err(AppError::db("Failed to fetch employer reviews"))?;

    if rows.is_empty() {
        return Err(AppError::NotFound("No reviews found for this job ID".into()));
    }
    Ok(Json(rows))
}

/// GET /student/employer_info/:job_id
pub async fn employer_info(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Json<Vec<EmployerInfoRow>>, AppError> {
    let rows = queries::employer_info(&state.db, job_id)
        .await
        .map_err(AppError::db("Failed to fetch company information"))?;

    if rows.is_empty() {
        return Err(AppError::NotFoundError(
            "No company found for the given jobId".into(),
        ));
    }
    Ok(Json(rows))
}

/// GET /student/alumni/:industry
pub async fn alumni_by_industry(
    State(state): State<AppState>,
    Path(industry): Path<String>,
) -> Result<Json<Vec<AlumnusRow>>, AppError> {
    // Validate before touching the database
    if industry.trim().is_empty() {
        return Err(AppError::Validation("Industry parameter is required.".into()));
    }

    let rows = queries::alumni_by_industry(&state.db, &industry)
        .await
        .map_err(AppError::db("Failed to fetch alumni"))?;

    if rows.is_empty() {
        return Err(AppError::NotFound("No alumni found for this industry.".into()));
    }
    Ok(Json(rows))
}

/// GET /student/employer_alumni_number
pub async fn employer_alumni_number(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployerAlumniRow>>, AppError> {
    let rows = queries::employer_alumni_counts(&state.db)
        .await
        .map_err(AppError::db("Failed to fetch employers and number of alumni"))?;
    Ok(Json(rows))
}

/// POST /student/add_employer_review
pub async fn add_employer_review(
    State(state): State<AppState>,
    Json(input): Json<AddReviewInput>,
) -> Result<(StatusCode, Json<EmployerReviewRow>), AppError> {
    if input.employer_id < 1 {
        return Err(AppError::Validation(
            "employerId must be a positive integer".into(),
        ));
    }
    if input.review.trim().is_empty() {
        return Err(AppError::Validation("review must not be empty".into()));
    }

    let row = queries::insert_employer_review(&state.db, input.employer_id, &input.review)
        .await
        .map_err(AppError::db("Failed to add review"))?;

    Ok((StatusCode::CREATED, Json(row)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use sqlx::PgPool;
    use tower::ServiceExt;

    use crate::routes::build_router;
    use crate::state::AppState;

    fn app(pool: PgPool) -> Router {
        build_router(AppState { db: pool })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_job_reviews_present_for_reviewed_employer(pool: PgPool) {
        let (status, json) = get_json(app(pool), "/student/job_reviews/1").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|r| r["jobId"] == 1 && r["title"] == "Backend Intern"));
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_job_reviews_absent_is_404(pool: PgPool) {
        // Job 2 exists but its employer has no reviews
        let (status, json) = get_json(app(pool), "/student/job_reviews/2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "No reviews found for this job ID");
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_employer_info_returns_one_logical_row(pool: PgPool) {
        let (status, json) = get_json(app(pool), "/student/employer_info/3").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["CompanyName"], "Initech");
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_employer_info_unknown_job_is_404(pool: PgPool) {
        let (status, json) = get_json(app(pool), "/student/employer_info/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "No company found for the given jobId");
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_job_posting_app_counts_never_decrease(pool: PgPool) {
        let (status, json) = get_json(app(pool), "/student/job_postings").await;
        assert_eq!(status, StatusCode::OK);
        let counts: Vec<i64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["NumApps"].as_i64().unwrap())
            .collect();
        assert_eq!(counts.len(), 3);
        assert!(
            counts.windows(2).all(|w| w[0] <= w[1]),
            "counts not ascending: {counts:?}"
        );
        // the posting nobody applied to still shows up, first
        assert_eq!(counts[0], 0);
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_employer_alumni_counts_never_increase(pool: PgPool) {
        let (status, json) = get_json(app(pool), "/student/employer_alumni_number").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        let counts: Vec<i64> = rows
            .iter()
            .map(|r| r["NumAlumni"].as_i64().unwrap())
            .collect();
        assert!(
            counts.windows(2).all(|w| w[0] >= w[1]),
            "counts not descending: {counts:?}"
        );
        assert_eq!(rows[0]["CompanyName"], "Acme");
        // companies without alumni never join into the ranking
        assert!(rows.iter().all(|r| r["CompanyName"] != "Initech"));
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_alumni_rows_match_requested_industry(pool: PgPool) {
        let (status, json) = get_json(app(pool), "/student/alumni/Finance").await;
        assert_eq!(status, StatusCode::OK);
        let mut ids: Vec<i64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["alumniId"].as_i64().unwrap())
            .collect();
        ids.sort_unstable();
        // exactly the Finance alumni, nobody from Technology
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_alumni_unknown_industry_is_404(pool: PgPool) {
        let (status, json) = get_json(app(pool), "/student/alumni/Consulting").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "No alumni found for this industry.");
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_matching_respects_proficiency_threshold(pool: PgPool) {
        // Student 1 meets SQL on job 1 but is below Rust there and below
        // job 2's SQL bar, so exactly one match comes back
        let (status, json) = get_json(app(pool.clone()), "/student/matching_job_postings").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["jobId"], 1);
        assert_eq!(rows[0]["SkillName"], "SQL");

        // a stronger student matches the demanding posting too
        let (status, json) =
            get_json(app(pool), "/student/matching_job_postings?student_id=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[sqlx::test(fixtures("jobboard"))]
    async fn test_add_review_persists_and_surfaces(pool: PgPool) {
        let response = app(pool.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/student/add_employer_review")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"employerId": 2, "review": "Fast-moving team"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let record: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(record["employerId"], 2);
        assert_eq!(record["review"], "Fast-moving team");
        assert!(record["reviewId"].is_i64());

        // the review is now visible through the job lookup for that employer
        let (status, json) = get_json(app(pool), "/student/job_reviews/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
