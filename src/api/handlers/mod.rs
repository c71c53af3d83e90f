//! REST endpoint handlers organized by resource.

pub mod draw;
pub mod monitor;
pub mod rehearsal;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(draw::routes())
        .merge(monitor::routes())
        .merge(rehearsal::routes())
        .merge(system::routes())
}
