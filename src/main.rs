use std::sync::Arc;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use wallet_api::api_doc::ApiDoc;
use wallet_api::routes::create_router;
use wallet_api::shared::config::{Config, StoreBackend};
use wallet_api::shared::database::{Database, MemoryStore};
use wallet_api::shared::services::AppState;

// CORS 설정: origin 목록이 비어 있으면 모든 origin 허용
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ]);

    if origins.is_empty() {
        return Ok(cors.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(cors.allow_origin(origins).allow_credentials(true))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    // AppState 생성 (저장소 선택 후 모든 Service 초기화)
    let app_state = match config.store_backend {
        StoreBackend::Postgres => {
            let db = Database::new(&config.database_url).await?;
            db.initialize().await?;
            log::info!("Store: PostgreSQL");
            AppState::new(db)
        }
        StoreBackend::Memory => {
            log::warn!("Store: in-memory (data is lost on restart)");
            AppState::in_memory(Arc::new(MemoryStore::new()))
        }
    };

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
        )
        .layer(cors_layer(&config.cors_origins)?)
        .with_state(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    log::info!("Server running on http://{}", bind_addr);
    log::info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
