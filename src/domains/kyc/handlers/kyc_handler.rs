use crate::domains::kyc::models::{KycStatusResponse, StartKycRequest, StartKycResponse};
use crate::shared::services::AppState;
use axum::{extract::{Path, State}, http::StatusCode, Json};

/// KYC 시작 핸들러 (mock)
/// Start KYC handler (mock)
#[utoipa::path(
    post,
    path = "/api/kyc/start",
    request_body = StartKycRequest,
    responses(
        (status = 200, description = "KYC started, status pending", body = StartKycResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "KYC"
)]
pub async fn start_kyc(
    State(app_state): State<AppState>,
    Json(request): Json<StartKycRequest>,
) -> Result<Json<StartKycResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .kyc_state
        .kyc_service
        .start_kyc(request)
        .await?;

    Ok(Json(response))
}

/// KYC 상태 조회 핸들러
/// Get KYC status handler
///
/// 생성 후 60초 미만: pending, 300초 미만: under_review, 이후: approved
/// 기록이 없으면 not_started
#[utoipa::path(
    get,
    path = "/api/kyc/status/{wallet_address}",
    params(
        ("wallet_address" = String, Path, description = "Wallet address")
    ),
    responses(
        (status = 200, description = "Current KYC status", body = KycStatusResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "KYC"
)]
pub async fn get_kyc_status(
    State(app_state): State<AppState>,
    Path(wallet_address): Path<String>,
) -> Result<Json<KycStatusResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .kyc_state
        .kyc_service
        .get_status(&wallet_address)
        .await?;

    Ok(Json(response))
}
