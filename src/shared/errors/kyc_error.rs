use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// KYC 관련 에러
/// KYC-related errors. A missing record is not an error (status not_started).
#[derive(Error, Debug)]
pub enum KycError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<KycError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: KycError) -> Self {
        let status = match &err {
            KycError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
