// =====================================================
// SLT 에어드랍 API 테스트
// =====================================================
// query string / JSON body 두 방식 모두 지원
// =====================================================

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn airdrop_via_query_credits_exactly_once() {
    let (app, store) = setup_app();
    register_wallet(&app, TEST_PUBLIC_KEY).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/slt/airdrop?wallet_address={}&amount=250", TEST_PUBLIC_KEY),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], format!("Airdropped 250 SLT to {}", TEST_PUBLIC_KEY));
    assert!(body["transaction_id"].is_string());

    assert_eq!(slt_balance(&app, TEST_PUBLIC_KEY).await, 250.0);
    assert_eq!(store.transaction_count(), 1);

    let (_, history) = send(&app, "GET", &format!("/api/wallet/{}/transactions", TEST_PUBLIC_KEY), None).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], body["transaction_id"]);
    assert_eq!(history[0]["from_address"], "SYSTEM_AIRDROP");
    assert_eq!(history[0]["to_address"], TEST_PUBLIC_KEY);
    assert_eq!(history[0]["token_type"], "SLT");
    assert_eq!(history[0]["status"], "confirmed");
    assert_eq!(history[0]["reward_slt"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn airdrop_via_json_body() {
    let (app, _) = setup_app();
    register_wallet(&app, TEST_PUBLIC_KEY).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/slt/airdrop",
        Some(json!({ "wallet_address": TEST_PUBLIC_KEY, "amount": 12.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slt_balance(&app, TEST_PUBLIC_KEY).await, 12.5);
}

#[tokio::test]
async fn airdrop_creates_missing_wallet() {
    let (app, store) = setup_app();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/slt/airdrop?wallet_address={}&amount=5", OTHER_PUBLIC_KEY),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.wallet_count(), 1);

    let (_, wallet) = send(&app, "GET", &format!("/api/wallet/{}", OTHER_PUBLIC_KEY), None).await;
    assert_eq!(wallet["address"], OTHER_PUBLIC_KEY);
    assert_eq!(wallet["balance_slt"], 5.0);
}

#[tokio::test]
async fn airdrops_add_on_top_of_rewards() {
    let (app, _) = setup_app();
    register_wallet(&app, TEST_PUBLIC_KEY).await;

    send(
        &app,
        "POST",
        "/api/transaction",
        Some(json!({
            "from_address": TEST_PUBLIC_KEY,
            "to_address": OTHER_PUBLIC_KEY,
            "amount": 40.0,
            "token_type": "USDC",
        })),
    )
    .await;
    send(
        &app,
        "POST",
        &format!("/api/slt/airdrop?wallet_address={}&amount=100", TEST_PUBLIC_KEY),
        None,
    )
    .await;

    let slt = slt_balance(&app, TEST_PUBLIC_KEY).await;
    assert!((slt - 104.0).abs() < 1e-9);
}

#[tokio::test]
async fn airdrop_requires_address_and_amount() {
    let (app, store) = setup_app();

    let (status, body) = send(&app, "POST", "/api/slt/airdrop?amount=10", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(
        &app,
        "POST",
        "/api/slt/airdrop",
        Some(json!({ "wallet_address": TEST_PUBLIC_KEY })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(store.transaction_count(), 0);
    assert_eq!(store.wallet_count(), 0);
}
