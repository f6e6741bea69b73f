// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers under /api

use axum::Router;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::wallet::routes::create_wallet_router;
use crate::domains::transaction::routes::create_transaction_router;
use crate::domains::kyc::routes::create_kyc_router;
use crate::domains::slt::routes::create_slt_router;
use crate::domains::health::routes::create_health_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    let api = Router::new()
        .merge(create_wallet_router())
        .merge(create_transaction_router())
        .merge(create_kyc_router())
        .merge(create_slt_router())
        .merge(create_health_router());

    Router::new().nest("/api", api)
}
