//! Axum WebSocket upgrade handler.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /ws` — Upgrade HTTP connection to WebSocket.
///
/// The snapshot and event receiver are taken before the upgrade so no draw
/// committed in between is missed.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let (snapshot, event_rx) = state.draw_service.subscribe().await;
    let draw_service = Arc::clone(&state.draw_service);

    ws.on_upgrade(move |socket| run_connection(socket, snapshot, event_rx, draw_service))
}
