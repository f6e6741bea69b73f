use crate::domains::wallet::models::{CreateWalletRequest, Wallet, WalletBalanceResponse};
use crate::domains::transaction::models::{Transaction, TransactionsQuery};
use crate::shared::services::AppState;
use axum::{extract::{Path, Query, State}, http::StatusCode, Json};

/// 지갑 등록 핸들러
/// Create (register) wallet handler
/// Note: public_key 기준 멱등 - 이미 있으면 기존 지갑 반환
#[utoipa::path(
    post,
    path = "/api/wallet",
    request_body = CreateWalletRequest,
    responses(
        (status = 200, description = "Wallet registered (or already registered)", body = Wallet),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallets"
)]
pub async fn create_wallet(
    State(app_state): State<AppState>,
    Json(request): Json<CreateWalletRequest>,
) -> Result<Json<Wallet>, (StatusCode, Json<serde_json::Value>)> {
    let wallet = app_state
        .wallet_state
        .wallet_service
        .create_wallet(request)
        .await?;

    Ok(Json(wallet))
}

/// 지갑 조회 핸들러
/// Get wallet by public key handler
#[utoipa::path(
    get,
    path = "/api/wallet/{public_key}",
    params(
        ("public_key" = String, Path, description = "Wallet public key")
    ),
    responses(
        (status = 200, description = "Wallet retrieved successfully", body = Wallet),
        (status = 404, description = "Wallet not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallets"
)]
pub async fn get_wallet(
    State(app_state): State<AppState>,
    Path(public_key): Path<String>,
) -> Result<Json<Wallet>, (StatusCode, Json<serde_json::Value>)> {
    let wallet = app_state
        .wallet_state
        .wallet_service
        .get_wallet(&public_key)
        .await?;

    Ok(Json(wallet))
}

/// 잔액 조회 핸들러
/// Get balance handler (creates the wallet when unknown)
#[utoipa::path(
    get,
    path = "/api/wallet/{public_key}/balance",
    params(
        ("public_key" = String, Path, description = "Wallet public key")
    ),
    responses(
        (status = 200, description = "Balances retrieved successfully", body = WalletBalanceResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallets"
)]
pub async fn get_balance(
    State(app_state): State<AppState>,
    Path(public_key): Path<String>,
) -> Result<Json<WalletBalanceResponse>, (StatusCode, Json<serde_json::Value>)> {
    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance(&public_key)
        .await?;

    Ok(Json(balance))
}

/// 지갑 거래 내역 핸들러
/// Wallet transaction history handler (newest first)
#[utoipa::path(
    get,
    path = "/api/wallet/{public_key}/transactions",
    params(
        ("public_key" = String, Path, description = "Wallet public key"),
        TransactionsQuery
    ),
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = Vec<Transaction>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallets"
)]
pub async fn get_wallet_transactions(
    State(app_state): State<AppState>,
    Path(public_key): Path<String>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, (StatusCode, Json<serde_json::Value>)> {
    let transactions = app_state
        .transaction_state
        .transaction_service
        .get_wallet_transactions(&public_key, query.limit)
        .await?;

    Ok(Json(transactions))
}
