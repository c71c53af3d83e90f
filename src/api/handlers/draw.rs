//! Participant endpoints: draw and status.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::client_addr::ClientAddress;
use crate::api::dto::{AlreadyDrawnResponse, DrawResponse, StatusResponse};
use crate::app_state::AppState;
use crate::error::{DrawError, ErrorResponse};
use crate::service::{DrawOutcome, StatusReport};

/// `GET /draw` — Draw one concept for the calling participant.
///
/// # Errors
///
/// Returns [`DrawError::InvalidIdentity`] if the caller address is not
/// IPv4.
#[utoipa::path(
    get,
    path = "/draw",
    tag = "Draw",
    summary = "Draw a concept",
    description = "Assigns a random remaining concept to the calling address. Each address draws at most once; a repeat attempt is rejected with 403 and the earlier result. When the pool is empty the concept is null.",
    responses(
        (status = 200, description = "Concept assigned, or pool exhausted", body = DrawResponse),
        (status = 400, description = "Caller address is not IPv4", body = ErrorResponse),
        (status = 403, description = "Caller already drew", body = AlreadyDrawnResponse),
    )
)]
pub async fn draw_handler(
    State(state): State<AppState>,
    ClientAddress(raw): ClientAddress,
) -> Result<Response, DrawError> {
    let response = match state.draw_service.draw(&raw).await? {
        DrawOutcome::Assigned { entry, remaining } => {
            Json(DrawResponse::assigned(&entry, remaining)).into_response()
        }
        DrawOutcome::AlreadyDrawn { entry, remaining } => (
            StatusCode::FORBIDDEN,
            Json(AlreadyDrawnResponse::new(entry, remaining)),
        )
            .into_response(),
        DrawOutcome::Exhausted => Json(DrawResponse::exhausted()).into_response(),
    };
    Ok(response)
}

/// `GET /status` — Report whether the calling participant has drawn.
///
/// # Errors
///
/// Returns [`DrawError::InvalidIdentity`] if the caller address is not
/// IPv4.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Draw",
    summary = "Participant status",
    description = "Returns the caller's earlier draw, or the number of concepts still available. Never changes state.",
    responses(
        (status = 200, description = "Participant status", body = StatusResponse),
        (status = 400, description = "Caller address is not IPv4", body = ErrorResponse),
    )
)]
pub async fn status_handler(
    State(state): State<AppState>,
    ClientAddress(raw): ClientAddress,
) -> Result<Json<StatusResponse>, DrawError> {
    let status = match state.draw_service.status(&raw).await? {
        StatusReport::Drawn(entry) => StatusResponse::drawn(&entry),
        StatusReport::NotDrawn { remaining } => StatusResponse::not_drawn(remaining),
    };
    Ok(Json(status))
}

/// Participant routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/draw", get(draw_handler).post(draw_handler))
        .route("/status", get(status_handler))
}
