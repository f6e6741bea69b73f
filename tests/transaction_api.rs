// =====================================================
// 트랜잭션 API 테스트
// =====================================================
// 보상 계산, 거래 내역 정렬/제한, 상태 변경
// =====================================================

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};

async fn create_tx(app: &axum::Router, from: &str, to: &str, amount: f64, token: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/transaction",
        Some(json!({
            "from_address": from,
            "to_address": to,
            "amount": amount,
            "token_type": token,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    body
}

#[tokio::test]
async fn usdc_transaction_rewards_sender() {
    let (app, _) = setup_app();
    register_wallet(&app, TEST_PUBLIC_KEY).await;

    let tx = create_tx(&app, TEST_PUBLIC_KEY, OTHER_PUBLIC_KEY, 10.5, "USDC").await;
    assert_eq!(tx["status"], "pending");
    assert_eq!(tx["token_type"], "USDC");
    assert_eq!(tx["reward_slt"].as_f64().unwrap(), 10.5 * 0.1);
    assert!(tx["signature"].is_null());

    let slt = slt_balance(&app, TEST_PUBLIC_KEY).await;
    assert!((slt - 1.05).abs() < 1e-12);
}

#[tokio::test]
async fn sol_and_slt_transactions_earn_nothing() {
    let (app, _) = setup_app();
    register_wallet(&app, TEST_PUBLIC_KEY).await;

    for token in ["SOL", "SLT"] {
        let tx = create_tx(&app, TEST_PUBLIC_KEY, OTHER_PUBLIC_KEY, 50.0, token).await;
        assert_eq!(tx["reward_slt"].as_f64().unwrap(), 0.0);
    }
    assert_eq!(slt_balance(&app, TEST_PUBLIC_KEY).await, 0.0);
}

#[tokio::test]
async fn rewards_accumulate_across_transactions() {
    let (app, _) = setup_app();
    register_wallet(&app, TEST_PUBLIC_KEY).await;

    create_tx(&app, TEST_PUBLIC_KEY, OTHER_PUBLIC_KEY, 100.0, "USDC").await;
    create_tx(&app, TEST_PUBLIC_KEY, OTHER_PUBLIC_KEY, 20.0, "USDC").await;
    // 수신자는 보상 없음
    create_tx(&app, OTHER_PUBLIC_KEY, TEST_PUBLIC_KEY, 30.0, "USDC").await;

    let slt = slt_balance(&app, TEST_PUBLIC_KEY).await;
    assert!((slt - 12.0).abs() < 1e-9);
}

#[tokio::test]
async fn unknown_token_type_is_rejected() {
    let (app, store) = setup_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/transaction",
        Some(json!({
            "from_address": TEST_PUBLIC_KEY,
            "to_address": OTHER_PUBLIC_KEY,
            "amount": 1.0,
            "token_type": "BTC",
        })),
    )
    .await;
    assert!(status.is_client_error());
    assert_eq!(store.transaction_count(), 0);
}

#[tokio::test]
async fn history_is_newest_first_and_honours_limit() {
    let (app, _) = setup_app();

    let mut ids = Vec::new();
    for amount in [1.0, 2.0, 3.0] {
        let tx = create_tx(&app, TEST_PUBLIC_KEY, OTHER_PUBLIC_KEY, amount, "SOL").await;
        ids.push(tx["id"].as_str().unwrap().to_string());
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    create_tx(&app, OTHER_PUBLIC_KEY, TEST_PUBLIC_KEY, 4.0, "SOL").await;
    create_tx(&app, "carol", "dave", 5.0, "SOL").await;

    let (status, body) = send(&app, "GET", &format!("/api/wallet/{}/transactions", TEST_PUBLIC_KEY), None).await;
    assert_eq!(status, StatusCode::OK);
    let history = body.as_array().unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0]["amount"].as_f64().unwrap(), 4.0);
    assert_eq!(history[3]["id"], ids[0].as_str());

    let (_, body) = send(&app, "GET", &format!("/api/wallet/{}/transactions?limit=2", TEST_PUBLIC_KEY), None).await;
    let limited = body.as_array().unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[1]["id"], ids[2].as_str());
}

#[tokio::test]
async fn status_update_via_query_string() {
    let (app, _) = setup_app();
    let tx = create_tx(&app, TEST_PUBLIC_KEY, OTHER_PUBLIC_KEY, 1.0, "SOL").await;
    let id = tx["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/transaction/{}/status?status=confirmed&signature=5VERv8NM", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Transaction status updated" }));

    let (_, history) = send(&app, "GET", &format!("/api/wallet/{}/transactions", TEST_PUBLIC_KEY), None).await;
    assert_eq!(history[0]["status"], "confirmed");
    assert_eq!(history[0]["signature"], "5VERv8NM");
    assert!(history[0]["updated_at"].is_string());
    // 보상은 재계산되지 않음
    assert_eq!(history[0]["reward_slt"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn status_update_via_json_body() {
    let (app, _) = setup_app();
    let tx = create_tx(&app, TEST_PUBLIC_KEY, OTHER_PUBLIC_KEY, 1.0, "SOL").await;
    let id = tx["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/transaction/{}/status", id),
        Some(json!({ "status": "failed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, history) = send(&app, "GET", &format!("/api/wallet/{}/transactions", TEST_PUBLIC_KEY), None).await;
    assert_eq!(history[0]["status"], "failed");
    assert!(history[0]["signature"].is_null());
}

#[tokio::test]
async fn status_update_errors() {
    let (app, _) = setup_app();

    let (status, body) = send(&app, "PUT", "/api/transaction/does-not-exist/status?status=confirmed", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, "PUT", "/api/transaction/does-not-exist/status", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PUT", "/api/transaction/does-not-exist/status?status=settled", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
