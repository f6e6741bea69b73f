// Health check route
use axum::{routing::get, Router};
use crate::domains::health::health_handler;
use crate::shared::services::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_handler::health_check))
}
