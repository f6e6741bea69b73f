// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수 제공
//
// 전체 라우터를 메모리 저장소 위에 띄우고 tower::ServiceExt::oneshot으로
// 요청을 보냅니다 (네트워크/DB 불필요).
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let (app, store) = setup_app();
//     let (status, body) = send(&app, "GET", "/api/health", None).await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::sync::Arc;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use wallet_api::routes::create_router;
use wallet_api::shared::database::MemoryStore;
use wallet_api::shared::services::AppState;

pub const TEST_PUBLIC_KEY: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";
pub const OTHER_PUBLIC_KEY: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

/// 테스트용 앱 생성
///
/// 저장소 핸들도 함께 반환하여 테스트에서 직접 확인/시드할 수 있습니다.
pub fn setup_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = create_router().with_state(AppState::in_memory(store.clone()));
    (app, store)
}

/// 요청 전송 후 (상태 코드, JSON body) 반환
/// JSON이 아닌 body는 Value::Null
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// 지갑 등록
pub async fn register_wallet(app: &Router, public_key: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/wallet",
        Some(serde_json::json!({ "public_key": public_key, "address": public_key })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

/// SLT 잔액 조회 (GET balance 사용)
pub async fn slt_balance(app: &Router, public_key: &str) -> f64 {
    let (status, body) = send(app, "GET", &format!("/api/wallet/{}/balance", public_key), None).await;
    assert_eq!(status, StatusCode::OK);
    body["balances"]["SLT"].as_f64().unwrap()
}
