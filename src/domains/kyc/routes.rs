// KYC domain routes
// KYC 도메인 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::kyc::handlers::kyc_handler;
use crate::shared::services::AppState;

/// Create KYC router
pub fn create_kyc_router() -> Router<AppState> {
    Router::new()
        .route("/kyc/start", post(kyc_handler::start_kyc))
        .route("/kyc/status/:wallet_address", get(kyc_handler::get_kyc_status))
}
