// SLT token domain routes
// SLT 토큰 도메인 라우터
use axum::{routing::post, Router};
use crate::domains::slt::handlers::airdrop_handler;
use crate::shared::services::AppState;

/// Create SLT router
pub fn create_slt_router() -> Router<AppState> {
    Router::new()
        .route("/slt/airdrop", post(airdrop_handler::airdrop_slt))
}
