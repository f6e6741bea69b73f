use crate::domains::transaction::models::{
    CreateTransactionRequest, Transaction, UpdateStatusParams, UpdateStatusResponse,
};
use crate::shared::services::AppState;
use crate::shared::errors::TransactionError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

// =====================================================
// Transaction Handler
// =====================================================
// 역할: 트랜잭션 기록 관련 HTTP API 엔드포인트
//
// 처리 흐름:
// HTTP Request → Handler → Service → Store → Response
// =====================================================

/// 트랜잭션 생성 핸들러
/// Create transaction handler
///
/// USDC 전송은 금액의 10%만큼 SLT 보상을 송신자에게 지급합니다.
#[utoipa::path(
    post,
    path = "/api/transaction",
    request_body = CreateTransactionRequest,
    responses(
        (status = 200, description = "Transaction recorded", body = Transaction),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Json<Transaction>, (StatusCode, Json<serde_json::Value>)> {
    let transaction = app_state
        .transaction_state
        .transaction_service
        .create_transaction(request)
        .await?;

    Ok(Json(transaction))
}

/// 트랜잭션 상태 변경 핸들러
/// Update transaction status handler
///
/// # Parameters
/// - status: pending | confirmed | failed (required)
/// - signature: optional
///
/// query string 우선, 없으면 JSON body에서 읽습니다 (모바일 클라이언트 호환).
#[utoipa::path(
    put,
    path = "/api/transaction/{id}/status",
    params(
        ("id" = String, Path, description = "Transaction ID"),
        UpdateStatusParams
    ),
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Missing or invalid status"),
        (status = 404, description = "Transaction not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn update_transaction_status(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<UpdateStatusParams>,
    body: Option<Json<UpdateStatusParams>>,
) -> Result<Json<UpdateStatusResponse>, (StatusCode, Json<serde_json::Value>)> {
    let params = query.or(body.map(|Json(body)| body));

    let status = params
        .status
        .ok_or_else(|| TransactionError::InvalidRequest("status is required".to_string()))?;

    let response = app_state
        .transaction_state
        .transaction_service
        .update_status(&id, status, params.signature.as_deref())
        .await?;

    Ok(Json(response))
}
