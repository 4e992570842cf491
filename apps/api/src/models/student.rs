//! Typed response records for the student endpoints, one struct per query.
//!
//! Serde renames pin the JSON keys to the documented wire names; `FromRow`
//! maps the snake_case SQL columns (and aliases) onto the fields.

use serde::Serialize;
use sqlx::FromRow;

/// Row for `GET /student/job_postings`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobPostingRow {
    #[serde(rename = "jobId")]
    pub job_id: i32,
    pub title: String,
    #[serde(rename = "NumApps")]
    pub num_apps: i64,
}

/// Row for `GET /student/matching_job_postings`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SkillMatchRow {
    #[serde(rename = "jobId")]
    pub job_id: i32,
    pub title: String,
    #[serde(rename = "skillId")]
    pub skill_id: i32,
    #[serde(rename = "SkillName")]
    pub skill_name: String,
    #[serde(rename = "expectedProficiency")]
    pub expected_proficiency: i32,
}

/// Row for `GET /student/job_reviews/{jobId}`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobReviewRow {
    #[serde(rename = "jobId")]
    pub job_id: i32,
    pub title: String,
    #[serde(rename = "reviewId")]
    pub review_id: i32,
    pub review: String,
}

/// Row for `GET /student/employer_info/{jobId}`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployerInfoRow {
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: Option<String>,
}

/// Row for `GET /student/alumni/{industry}`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AlumnusRow {
    #[serde(rename = "alumniId")]
    pub alumni_id: i32,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: Option<String>,
}

/// Row for `GET /student/employer_alumni_number`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployerAlumniRow {
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "NumAlumni")]
    pub num_alumni: i64,
}

/// Record returned by `POST /student/add_employer_review`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployerReviewRow {
    #[serde(rename = "reviewId")]
    pub review_id: i32,
    #[serde(rename = "employerId")]
    pub employer_id: i32,
    pub review: String,
}
