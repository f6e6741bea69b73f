use crate::domains::slt::models::{AirdropParams, AirdropResponse};
use crate::shared::services::AppState;
use crate::shared::errors::WalletError;
use axum::{extract::{Query, State}, http::StatusCode, Json};

/// SLT 에어드랍 핸들러
/// Airdrop SLT handler
///
/// # Parameters
/// - wallet_address: 받을 지갑 (required)
/// - amount: SLT 수량 (required, 상한 없음)
///
/// query string 우선, 없으면 JSON body에서 읽습니다.
#[utoipa::path(
    post,
    path = "/api/slt/airdrop",
    params(
        AirdropParams
    ),
    responses(
        (status = 200, description = "SLT credited", body = AirdropResponse),
        (status = 400, description = "Missing wallet_address or amount"),
        (status = 500, description = "Internal server error")
    ),
    tag = "SLT"
)]
pub async fn airdrop_slt(
    State(app_state): State<AppState>,
    Query(query): Query<AirdropParams>,
    body: Option<Json<AirdropParams>>,
) -> Result<Json<AirdropResponse>, (StatusCode, Json<serde_json::Value>)> {
    let params = query.or(body.map(|Json(body)| body));

    let wallet_address = params
        .wallet_address
        .ok_or_else(|| WalletError::InvalidRequest("wallet_address is required".to_string()))?;
    let amount = params
        .amount
        .ok_or_else(|| WalletError::InvalidRequest("amount is required".to_string()))?;

    let response = app_state
        .slt_state
        .airdrop_service
        .airdrop(&wallet_address, amount)
        .await?;

    Ok(Json(response))
}
