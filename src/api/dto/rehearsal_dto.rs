//! Rehearsal draw DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CategoryId;
use crate::service::RehearsalDraw;

/// Response body for `GET /test/draw`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RehearsalResponse {
    /// Drawn concept label; `null` when the rehearsal pool is empty.
    pub concept: Option<String>,
    /// Category of the drawn concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    /// Category color as `#RRGGBB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Concepts left in the rehearsal pool.
    pub remaining: usize,
}

impl From<RehearsalDraw> for RehearsalResponse {
    fn from(draw: RehearsalDraw) -> Self {
        match draw.concept {
            Some(concept) => Self {
                color: Some(concept.color.to_string()),
                concept: Some(concept.label),
                category: Some(concept.category),
                remaining: draw.remaining,
            },
            None => Self {
                concept: None,
                category: None,
                color: None,
                remaining: draw.remaining,
            },
        }
    }
}

/// Response body for `POST /test/reset`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RehearsalResetResponse {
    /// Size of the refilled rehearsal pool.
    pub remaining: usize,
}
