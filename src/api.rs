use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tone_reader::{AnalysisFailure, AnalysisResult};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

impl AnalyzeRequest {
    pub fn into_text(self, missing: &str) -> Result<String, ApiError> {
        let text = self.text.unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(ApiError::new(StatusCode::BAD_REQUEST, missing));
        }
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Complete(AnalysisResult),
    Failed(AnalysisFailure),
}

impl From<Result<AnalysisResult, AnalysisFailure>> for AnalyzeResponse {
    fn from(outcome: Result<AnalysisResult, AnalysisFailure>) -> Self {
        match outcome {
            Ok(result) => AnalyzeResponse::Complete(result),
            Err(failure) => AnalyzeResponse::Failed(failure),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            detail: &self.detail,
        });
        (self.status, body).into_response()
    }
}
