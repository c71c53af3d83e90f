//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{
    AlreadyDrawnResponse, CategoryInfo, DrawResponse, RehearsalResetResponse, RehearsalResponse,
    StatusResponse,
};
use super::handlers::{draw, monitor, rehearsal, system};
use crate::domain::{DrawSnapshot, DrawStats, LedgerEntry};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "concept-draw",
        description = "Draw-once concept allocator with a real-time monitor feed"
    ),
    paths(
        draw::draw_handler,
        draw::status_handler,
        monitor::monitor_handler,
        rehearsal::rehearsal_draw_handler,
        rehearsal::rehearsal_reset_handler,
        system::health_handler,
        system::categories_handler,
    ),
    components(schemas(
        DrawResponse,
        AlreadyDrawnResponse,
        StatusResponse,
        CategoryInfo,
        RehearsalResponse,
        RehearsalResetResponse,
        DrawSnapshot,
        DrawStats,
        LedgerEntry,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Draw", description = "Participant draw and status"),
        (name = "Monitor", description = "Facilitator view of all draws"),
        (name = "Rehearsal", description = "Isolated practice draws"),
        (name = "System", description = "Health and configuration"),
    )
)]
pub struct ApiDoc;
