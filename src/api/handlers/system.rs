//! System endpoints: health check and category table.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::CategoryInfo;
use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    remaining: usize,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, current timestamp, and remaining pool size.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            remaining: state.draw_service.remaining_count().await,
        }),
    )
}

/// `GET /config/categories` — List the configured categories.
#[utoipa::path(
    get,
    path = "/config/categories",
    tag = "System",
    summary = "List categories",
    description = "Returns every category with its display color and the number of concepts it contributed at startup.",
    responses(
        (status = 200, description = "Category table", body = Vec<CategoryInfo>),
    )
)]
pub async fn categories_handler(State(state): State<AppState>) -> impl IntoResponse {
    let categories: Vec<CategoryInfo> = state
        .draw_service
        .table()
        .definitions()
        .iter()
        .map(|def| CategoryInfo {
            id: def.category.id.clone(),
            color: def.category.color.to_string(),
            concept_count: def.labels.len(),
        })
        .collect();
    (StatusCode::OK, Json(categories))
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/categories", get(categories_handler))
}
