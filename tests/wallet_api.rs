// =====================================================
// 지갑 API 테스트
// =====================================================
// 등록 멱등성, 조회, 잔액 조회 시 자동 생성
// =====================================================

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn wallet_registration_is_idempotent() {
    let (app, store) = setup_app();

    let (status, first) = send(
        &app,
        "POST",
        "/api/wallet",
        Some(json!({ "public_key": TEST_PUBLIC_KEY, "address": "first-address" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["public_key"], TEST_PUBLIC_KEY);
    assert_eq!(first["balance_sol"], 0.0);
    assert_eq!(first["balance_usdc"], 0.0);
    assert_eq!(first["balance_slt"], 0.0);

    let (status, second) = send(
        &app,
        "POST",
        "/api/wallet",
        Some(json!({ "public_key": TEST_PUBLIC_KEY, "address": "second-address" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["address"], "first-address");
    assert_eq!(store.wallet_count(), 1);
}

#[tokio::test]
async fn get_wallet_returns_record_or_404() {
    let (app, _) = setup_app();
    let created = register_wallet(&app, TEST_PUBLIC_KEY).await;

    let (status, body) = send(&app, "GET", &format!("/api/wallet/{}", TEST_PUBLIC_KEY), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(&app, "GET", "/api/wallet/unknown-key", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("unknown-key"));
}

#[tokio::test]
async fn balance_of_unknown_wallet_creates_it_with_zeroes() {
    let (app, store) = setup_app();

    let (status, body) = send(&app, "GET", &format!("/api/wallet/{}/balance", OTHER_PUBLIC_KEY), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["public_key"], OTHER_PUBLIC_KEY);
    assert_eq!(body["balances"], json!({ "SOL": 0.0, "USDC": 0.0, "SLT": 0.0 }));
    assert!(body["timestamp"].is_string());
    assert_eq!(store.wallet_count(), 1);

    // 이제 조회 가능 (address = public_key)
    let (status, wallet) = send(&app, "GET", &format!("/api/wallet/{}", OTHER_PUBLIC_KEY), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wallet["address"], OTHER_PUBLIC_KEY);

    // 두 번째 조회는 새 지갑을 만들지 않음
    send(&app, "GET", &format!("/api/wallet/{}/balance", OTHER_PUBLIC_KEY), None).await;
    assert_eq!(store.wallet_count(), 1);
}

#[tokio::test]
async fn malformed_wallet_body_is_rejected() {
    let (app, store) = setup_app();
    let (status, _) = send(&app, "POST", "/api/wallet", Some(json!({ "public_key": 42 }))).await;
    assert!(status.is_client_error());
    assert_eq!(store.wallet_count(), 0);
}

#[tokio::test]
async fn health_reports_healthy() {
    let (app, _) = setup_app();
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "SUÉLTALO Crypto Wallet API");
    assert!(body["timestamp"].is_string());
}
