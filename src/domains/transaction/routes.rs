// Transaction domain routes
// 트랜잭션 도메인 라우터
use axum::{routing::{post, put}, Router};
use crate::domains::transaction::handlers::transaction_handler;
use crate::shared::services::AppState;

/// Create transaction router
/// 트랜잭션 라우터 생성
///
/// 지갑별 거래 내역은 wallet 라우터(`/wallet/:public_key/transactions`)에 있습니다.
pub fn create_transaction_router() -> Router<AppState> {
    Router::new()
        .route("/transaction", post(transaction_handler::create_transaction))
        .route("/transaction/:id/status", put(transaction_handler::update_transaction_status))
}
