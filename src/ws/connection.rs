//! WebSocket observer connection loop.
//!
//! Sends the initial snapshot, then forwards every draw event from the
//! [`broadcast::Receiver`] while answering client commands.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::messages::{WsCommand, WsMessage, WsMessageType};
use crate::domain::{DrawEvent, DrawSnapshot};
use crate::service::DrawService;

/// Runs the read/write loop for a single observer connection.
///
/// - Sends `snapshot` first, so the observer starts from the full state.
/// - Forwards each [`DrawEvent`] as an `event` message in commit order.
/// - Answers `snapshot` and `ping` commands.
///
/// Delivery is at-most-once: a lagging observer skips the dropped events
/// and a disconnected one is simply cleaned up.
pub async fn run_connection(
    socket: WebSocket,
    snapshot: DrawSnapshot,
    mut event_rx: broadcast::Receiver<DrawEvent>,
    draw_service: Arc<DrawService>,
) {
    let connection_id = uuid::Uuid::new_v4();
    tracing::info!(%connection_id, "monitor client connected");

    let (mut ws_tx, mut ws_rx) = socket.split();

    let initial = snapshot_message(&snapshot);
    if let Some(json) = initial.to_json()
        && ws_tx.send(Message::text(json)).await.is_err()
    {
        tracing::debug!(%connection_id, "monitor client gone before snapshot");
        return;
    }

    loop {
        tokio::select! {
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let response = handle_text_message(&text, &draw_service).await;
                        if let Some(resp_json) = response
                            && ws_tx.send(Message::text(resp_json)).await.is_err() {
                                break;
                            }
                    }
                    Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                    _ => {}
                }
            }
            // Event from EventBus
            event = event_rx.recv() => {
                match event {
                    Ok(draw_event) => {
                        let payload = serde_json::to_value(&draw_event).unwrap_or_default();
                        let msg = WsMessage::server(WsMessageType::Event, payload);
                        if let Some(json) = msg.to_json()
                            && ws_tx.send(Message::text(json)).await.is_err() {
                                break;
                            }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(%connection_id, lagged = n, "monitor client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::info!(%connection_id, "monitor client disconnected");
}

fn snapshot_message(snapshot: &DrawSnapshot) -> WsMessage {
    WsMessage::server(
        WsMessageType::Snapshot,
        serde_json::to_value(snapshot).unwrap_or_default(),
    )
}

/// Handles a text message from the client, returning an optional JSON response.
async fn handle_text_message(text: &str, draw_service: &DrawService) -> Option<String> {
    let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
        return WsMessage::error("", 400, "malformed JSON").to_json();
    };

    let response = match serde_json::from_value::<WsCommand>(msg.payload) {
        Ok(WsCommand::Snapshot) => {
            let snapshot = draw_service.snapshot().await;
            WsMessage::new(
                msg.id,
                WsMessageType::Response,
                serde_json::to_value(&snapshot).unwrap_or_default(),
            )
        }
        Ok(WsCommand::Ping) => WsMessage::new(
            msg.id,
            WsMessageType::Response,
            serde_json::json!({ "pong": true }),
        ),
        Err(_) => WsMessage::error(msg.id, 404, "unknown command"),
    };
    response.to_json()
}
