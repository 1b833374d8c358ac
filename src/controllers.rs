use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub mod health;
pub mod plant_info;

/// Failures the caller gets to see.  Upstream trouble is never one of them,
/// it's answered with the fallback instead.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Plant name is required")]
    MissingPlantName,
    #[error("Failed to get plant information")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingPlantName => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::MissingPlantName => json!({ "error": self.to_string() }),
            ApiError::Internal(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
