//! Rehearsal endpoints: practice draws against an isolated pool.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::client_addr::ClientAddress;
use crate::api::dto::{RehearsalResetResponse, RehearsalResponse};
use crate::app_state::AppState;
use crate::domain::Identity;
use crate::error::{DrawError, ErrorResponse};
use crate::service::RehearsalPool;

fn rehearsal_pool(state: &AppState) -> Result<Arc<RehearsalPool>, DrawError> {
    state
        .rehearsal
        .as_ref()
        .map(Arc::clone)
        .ok_or(DrawError::RehearsalDisabled)
}

/// `GET /test/draw` — Draw from the rehearsal pool.
///
/// # Errors
///
/// Returns [`DrawError::RehearsalDisabled`] when rehearsal is switched off
/// and [`DrawError::InvalidIdentity`] if the caller address is not IPv4.
#[utoipa::path(
    get,
    path = "/test/draw",
    tag = "Rehearsal",
    summary = "Rehearsal draw",
    description = "Draws from an isolated copy of the catalog. Unlimited per address; never affects real draws or observers.",
    responses(
        (status = 200, description = "Rehearsal result", body = RehearsalResponse),
        (status = 400, description = "Caller address is not IPv4", body = ErrorResponse),
        (status = 404, description = "Rehearsal disabled", body = ErrorResponse),
    )
)]
pub async fn rehearsal_draw_handler(
    State(state): State<AppState>,
    ClientAddress(raw): ClientAddress,
) -> Result<Json<RehearsalResponse>, DrawError> {
    let pool = rehearsal_pool(&state)?;
    let identity = Identity::resolve(&raw)?;
    Ok(Json(pool.draw(identity).await.into()))
}

/// `POST /test/reset` — Refill the rehearsal pool.
///
/// # Errors
///
/// Returns [`DrawError::RehearsalDisabled`] when rehearsal is switched off.
#[utoipa::path(
    post,
    path = "/test/reset",
    tag = "Rehearsal",
    summary = "Reset rehearsal pool",
    description = "Refills the rehearsal pool with the full catalog.",
    responses(
        (status = 200, description = "Rehearsal pool refilled", body = RehearsalResetResponse),
        (status = 404, description = "Rehearsal disabled", body = ErrorResponse),
    )
)]
pub async fn rehearsal_reset_handler(
    State(state): State<AppState>,
) -> Result<Json<RehearsalResetResponse>, DrawError> {
    let pool = rehearsal_pool(&state)?;
    Ok(Json(RehearsalResetResponse {
        remaining: pool.reset().await,
    }))
}

/// Rehearsal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/test/draw", get(rehearsal_draw_handler))
        .route("/test/reset", post(rehearsal_reset_handler))
}
