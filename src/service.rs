//! HTTP client for the two external collaborators: the quiz generator and
//! the free-form helper. Both calls run on worker threads, never on the UI
//! thread, so the blocking client is fine here.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{HelperRequest, HelperResponse, Question, QuizRequest, QuizResponse};

pub const DEFAULT_BACKEND: &str = "http://localhost:5000";

/// Shown when the helper responds without an `answer` field.
pub const HELPER_FALLBACK: &str =
    "I couldn't generate a detailed explanation right now. Please try again.";

/// Shown when the helper request fails outright. Helper failures never
/// affect quiz session state.
pub const HELPER_UNAVAILABLE: &str =
    "There was an error contacting the AI helper. Please try again in a moment.";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Error message reported by the backend itself.
    #[error("{0}")]
    Backend(String),
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// `{ "error": "..." }` body the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct QuizService {
    client: Client,
    base_url: String,
}

impl QuizService {
    pub fn new(base_url: &str) -> Result<Self, ServiceError> {
        // Generation can be slow on large quizzes; keep a generous timeout.
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a generated question sequence. A response with no
    /// `questions` field is a valid zero-length quiz.
    pub fn generate_quiz(&self, request: &QuizRequest) -> Result<Vec<Question>, ServiceError> {
        let response = self
            .client
            .post(format!("{}/generate-quiz", self.base_url))
            .json(request)
            .send()?;
        let response = check_status(response)?;
        let body: QuizResponse = response.json()?;
        Ok(body.questions)
    }

    /// Forward a free-form question to the helper. The raw (possibly
    /// markdown) answer is returned as-is; rendering is the UI's concern.
    pub fn ask_helper(&self, request: &HelperRequest) -> Result<String, ServiceError> {
        let response = self
            .client
            .post(format!("{}/ask-ai", self.base_url))
            .json(request)
            .send()?;
        let response = check_status(response)?;
        let body: HelperResponse = response.json()?;
        Ok(body.answer.unwrap_or_else(|| HELPER_FALLBACK.to_string()))
    }
}

fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // Prefer the backend's own error message when it sends one.
    if let Ok(body) = response.json::<ErrorBody>() {
        if let Some(message) = body.error.filter(|m| !m.trim().is_empty()) {
            return Err(ServiceError::Backend(message));
        }
    }
    Err(ServiceError::HttpStatus(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let svc = QuizService::new("http://localhost:5000/").unwrap();
        assert_eq!(svc.base_url(), "http://localhost:5000");
    }

    #[test]
    fn error_body_parses_with_and_without_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"topic too broad"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("topic too broad"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }
}
