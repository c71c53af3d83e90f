//! Facilitator monitor endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::DrawSnapshot;

/// `GET /api/monitor` — Full ledger and statistics.
#[utoipa::path(
    get,
    path = "/api/monitor",
    tag = "Monitor",
    summary = "Draw snapshot",
    description = "Returns every participant's draw in commit order plus aggregate and per-category counts. The same payload is pushed to WebSocket observers on connect.",
    responses(
        (status = 200, description = "Current snapshot", body = DrawSnapshot),
    )
)]
pub async fn monitor_handler(State(state): State<AppState>) -> Json<DrawSnapshot> {
    Json(state.draw_service.snapshot().await)
}

/// Monitor routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/monitor", get(monitor_handler))
}
