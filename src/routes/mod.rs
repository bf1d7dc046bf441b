use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::CONFIG;

pub mod analyze;
pub mod remedies;

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze-color", post(analyze::analyze_color))
        .route("/api/analyze-body-type", post(analyze::analyze_body_type))
        .route("/api/analyze-makeup", post(analyze::analyze_makeup))
        .route("/api/remedies", get(remedies::list_remedies))
        .route("/api/remedies/categories", get(remedies::list_categories))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(CONFIG.max_upload_bytes))
}
