//! Fixed SQL templates for the student endpoints.
//!
//! Every statement binds its inputs as parameters; nothing is interpolated
//! into the query text.

use sqlx::PgPool;

use crate::models::student::{
    AlumnusRow, EmployerAlumniRow, EmployerInfoRow, EmployerReviewRow, JobPostingRow,
    JobReviewRow, SkillMatchRow,
};

/// All postings with their application counts, least-applied first.
pub async fn job_postings_with_counts(pool: &PgPool) -> Result<Vec<JobPostingRow>, sqlx::Error> {
    sqlx::query_as::<_, JobPostingRow>(
        r#"
        SELECT
            j.job_id,
            j.title,
            COUNT(a.app_id) AS num_apps
        FROM job_postings j
        LEFT JOIN applications a ON j.job_id = a.job_id
        GROUP BY j.job_id
        ORDER BY num_apps
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Postings whose required skills the student meets or exceeds.
pub async fn matching_job_postings(
    pool: &PgPool,
    student_id: i32,
) -> Result<Vec<SkillMatchRow>, sqlx::Error> {
    sqlx::query_as::<_, SkillMatchRow>(
        r#"
        SELECT DISTINCT
            j.job_id,
            j.title,
            ps.skill_id,
            s.name AS skill_name,
            ps.expected_proficiency
        FROM job_postings j
        JOIN posting_skills ps ON j.job_id = ps.job_id
        JOIN student_skills ss ON ps.skill_id = ss.skill_id
        JOIN skills s ON ps.skill_id = s.skill_id
        WHERE ss.student_id = $1
          AND ss.proficiency >= ps.expected_proficiency
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
}

/// Reviews about the employer behind a posting.
pub async fn job_reviews(pool: &PgPool, job_id: i32) -> Result<Vec<JobReviewRow>, sqlx::Error> {
    sqlx::query_as::<_, JobReviewRow>(
        r#"
        SELECT
            j.job_id,
            j.title,
            er.review_id,
            er.review
        FROM job_postings j
        JOIN recruiters r ON j.recruiter_id = r.recruiter_id
        JOIN reviews_on_employers er ON er.employer_id = r.emp_id
        WHERE j.job_id = $1
        "#,
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}

/// Name and LinkedIn of the company behind a posting (0 or 1 rows).
pub async fn employer_info(pool: &PgPool, job_id: i32) -> Result<Vec<EmployerInfoRow>, sqlx::Error> {
    sqlx::query_as::<_, EmployerInfoRow>(
        r#"
        SELECT
            e.name AS company_name,
            e.linkedin
        FROM job_postings j
        JOIN recruiters r ON j.recruiter_id = r.recruiter_id
        JOIN companies e ON r.emp_id = e.emp_id
        WHERE j.job_id = $1
        "#,
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}

/// Alumni working in the given industry, with their employer's name.
pub async fn alumni_by_industry(
    pool: &PgPool,
    industry: &str,
) -> Result<Vec<AlumnusRow>, sqlx::Error> {
    sqlx::query_as::<_, AlumnusRow>(
        r#"
        SELECT
            a.alumni_id,
            e.name AS company_name,
            a.first_name,
            a.last_name,
            a.email,
            a.linkedin
        FROM alumni a
        JOIN companies e ON a.emp_id = e.emp_id
        WHERE a.industry = $1
        "#,
    )
    .bind(industry)
    .fetch_all(pool)
    .await
}

/// Companies ranked by how many alumni work there, most first.
pub async fn employer_alumni_counts(pool: &PgPool) -> Result<Vec<EmployerAlumniRow>, sqlx::Error> {
    sqlx::query_as::<_, EmployerAlumniRow>(
        r#"
        SELECT
            e.name AS company_name,
            COUNT(a.alumni_id) AS num_alumni
        FROM alumni a
        JOIN companies e ON a.emp_id = e.emp_id
        GROUP BY e.name
        ORDER BY num_alumni DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Inserts a review for an employer and returns the stored record.
pub async fn insert_employer_review(
    pool: &PgPool,
    employer_id: i32,
    review: &str,
) -> Result<EmployerReviewRow, sqlx::Error> {
    sqlx::query_as::<_, EmployerReviewRow>(
        r#"
        INSERT INTO reviews_on_employers (employer_id, review)
        VALUES ($1, $2)
        RETURNING review_id, employer_id, review
        "#,
    )
    .bind(employer_id)
    .bind(review)
    .fetch_one(pool)
    .await
}
