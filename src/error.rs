use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorMessage;

pub const NOT_FOUND_MESSAGE: &str = "Repository not found";
pub const RATE_LIMIT_MESSAGE: &str = "API rate limit exceeded. Try again later.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";
pub const MISSING_PARAMS_MESSAGE: &str = "Owner and repository name are required.";

#[derive(Error, Debug)]
pub enum ContributorsError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ContributorsError>;

impl ContributorsError {
    /// Local status code and caller-facing message for this failure.
    ///
    /// Only upstream 404 and 403 are classified; everything else collapses to
    /// a generic 500 whose detail stays in the server log.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ContributorsError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            ContributorsError::RateLimitExceeded(_) => (StatusCode::FORBIDDEN, RATE_LIMIT_MESSAGE),
            ContributorsError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, MISSING_PARAMS_MESSAGE),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE),
        }
    }
}

impl IntoResponse for ContributorsError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorMessage::new(message))).into_response()
    }
}
