use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 트랜잭션 관련 에러
/// Transaction-related errors
#[derive(Error, Debug)]
pub enum TransactionError {
    /// 트랜잭션을 찾을 수 없음
    #[error("Transaction not found: id={id}")]
    NotFound { id: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TransactionError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: TransactionError) -> Self {
        let status = match &err {
            TransactionError::NotFound { .. } => StatusCode::NOT_FOUND,
            TransactionError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            TransactionError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
