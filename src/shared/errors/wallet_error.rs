use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 지갑 관련 에러 (SLT 에어드랍 포함)
/// Wallet-related errors (including SLT airdrops)
#[derive(Error, Debug)]
pub enum WalletError {
    /// 지갑을 찾을 수 없음
    /// Wallet not found
    #[error("Wallet not found: public_key={public_key}")]
    WalletNotFound { public_key: String },

    /// 필수 파라미터 누락
    /// Missing required parameter
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// WalletError를 HTTP 응답으로 변환
impl From<WalletError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: WalletError) -> Self {
        let status = match &err {
            WalletError::WalletNotFound { .. } => StatusCode::NOT_FOUND,
            WalletError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            WalletError::DatabaseError(_) | WalletError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
