//! Thin client for the student API: one method per backend endpoint.

use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// One decoded response row: column name mapped to value, in response order.
pub type Row = Map<String, Value>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach the API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer; carries the server-provided message when one exists.
    #[error("{0}")]
    Backend(String),
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// GET /job_postings
    pub async fn job_postings(&self) -> Result<Vec<Row>, ApiError> {
        self.get_rows("job_postings".to_string()).await
    }

    /// GET /matching_job_postings, optionally for a specific student.
    pub async fn matching_job_postings(
        &self,
        student_id: Option<i32>,
    ) -> Result<Vec<Row>, ApiError> {
        let path = match student_id {
            Some(id) => format!("matching_job_postings?student_id={id}"),
            None => "matching_job_postings".to_string(),
        };
        self.get_rows(path).await
    }

    /// GET /job_reviews/{job_id}
    pub async fn job_reviews(&self, job_id: i32) -> Result<Vec<Row>, ApiError> {
        self.get_rows(format!("job_reviews/{job_id}")).await
    }

    /// GET /employer_info/{job_id}
    pub async fn employer_info(&self, job_id: i32) -> Result<Vec<Row>, ApiError> {
        self.get_rows(format!("employer_info/{job_id}")).await
    }

    /// GET /alumni/{industry}
    pub async fn alumni(&self, industry: &str) -> Result<Vec<Row>, ApiError> {
        self.get_rows(format!("alumni/{}", encode_segment(industry)))
            .await
    }

    /// GET /employer_alumni_number
    pub async fn employer_alumni_number(&self) -> Result<Vec<Row>, ApiError> {
        self.get_rows("employer_alumni_number".to_string()).await
    }

    /// POST /add_employer_review
    pub async fn add_employer_review(
        &self,
        employer_id: i32,
        review: &str,
    ) -> Result<Row, ApiError> {
        let url = format!("{}/add_employer_review", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "employerId": employer_id, "review": review }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(ApiError::Backend(error_message(status, &body)));
        }
        Ok(response.json().await?)
    }

    async fn get_rows(&self, path: String) -> Result<Vec<Row>, ApiError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(ApiError::Backend(error_message(status, &body)));
        }
        Ok(response.json().await?)
    }
}

/// Percent-encodes one URL path segment so user input containing `/`, `?`
/// or `#` cannot change the request target.
fn encode_segment(raw: &str) -> String {
    let mut url = reqwest::Url::parse("http://localhost").expect("static base URL parses");
    url.path_segments_mut()
        .expect("http URLs always have path segments")
        .push(raw);
    url.path()[1..].to_string()
}

/// Pulls the server's `error` or `message` field out of an error body,
/// falling back to the bare status code.
fn error_message(status: StatusCode, body: &Value) -> String {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_error_key() {
        let body = json!({ "error": "Failed to fetch jobs" });
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, &body),
            "Failed to fetch jobs"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_message_key() {
        let body = json!({ "message": "No reviews found for this job ID" });
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, &body),
            "No reviews found for this job ID"
        );
    }

    #[test]
    fn test_error_message_without_body() {
        let msg = error_message(StatusCode::BAD_GATEWAY, &Value::Null);
        assert!(msg.contains("502"));
    }

    #[test]
    fn test_encode_segment_keeps_plain_industries() {
        assert_eq!(encode_segment("Finance"), "Finance");
    }

    #[test]
    fn test_encode_segment_escapes_spaces() {
        assert_eq!(encode_segment("Real Estate"), "Real%20Estate");
    }

    #[test]
    fn test_encode_segment_escapes_target_changing_characters() {
        let encoded = encode_segment("a/b?c#d");
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('?'));
        assert!(!encoded.contains('#'));
        assert_eq!(encoded, "a%2Fb%3Fc%23d");
    }
}
