//! Draw and status DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{CategoryId, LedgerEntry};

/// Response body for `GET /draw` when a concept was assigned or the pool
/// is exhausted (`concept` is `null` in the latter case).
#[derive(Debug, Serialize, ToSchema)]
pub struct DrawResponse {
    /// Drawn concept label; `null` when no concepts remain.
    pub concept: Option<String>,
    /// Category of the drawn concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    /// Category color as `#RRGGBB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Concepts left after the draw.
    pub remaining: usize,
    /// Time the draw was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl DrawResponse {
    /// Response for a fresh assignment.
    #[must_use]
    pub fn assigned(entry: &LedgerEntry, remaining: usize) -> Self {
        Self {
            concept: Some(entry.concept.clone()),
            category: Some(entry.category.clone()),
            color: Some(entry.color.to_string()),
            remaining,
            timestamp: Some(entry.timestamp),
        }
    }

    /// Response when the pool is empty.
    #[must_use]
    pub const fn exhausted() -> Self {
        Self {
            concept: None,
            category: None,
            color: None,
            remaining: 0,
            timestamp: None,
        }
    }
}

/// Response body for `GET /draw` (403) when the participant already drew.
#[derive(Debug, Serialize, ToSchema)]
pub struct AlreadyDrawnResponse {
    /// Human-readable rejection reason.
    pub error: String,
    /// Concepts currently left.
    pub remaining: usize,
    /// The participant's earlier draw.
    pub previous: LedgerEntry,
}

impl AlreadyDrawnResponse {
    /// Builds the rejection for `previous`.
    #[must_use]
    pub fn new(previous: LedgerEntry, remaining: usize) -> Self {
        Self {
            error: "You have already drawn a concept".to_string(),
            remaining,
            previous,
        }
    }
}

/// Response body for `GET /status`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Whether the participant has drawn.
    pub drawn: bool,
    /// Drawn concept label (only when `drawn`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    /// Category of the drawn concept (only when `drawn`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    /// Category color as `#RRGGBB` (only when `drawn`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Time of the draw (only when `drawn`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Concepts currently left (only when not `drawn`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<usize>,
}

impl StatusResponse {
    /// Status of a participant that has drawn.
    #[must_use]
    pub fn drawn(entry: &LedgerEntry) -> Self {
        Self {
            drawn: true,
            concept: Some(entry.concept.clone()),
            category: Some(entry.category.clone()),
            color: Some(entry.color.to_string()),
            timestamp: Some(entry.timestamp),
            remaining: None,
        }
    }

    /// Status of a participant that has not drawn yet.
    #[must_use]
    pub const fn not_drawn(remaining: usize) -> Self {
        Self {
            drawn: false,
            concept: None,
            category: None,
            color: None,
            timestamp: None,
            remaining: Some(remaining),
        }
    }
}

/// One category as reported by `GET /config/categories`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryInfo {
    /// Category key.
    pub id: CategoryId,
    /// Category color as `#RRGGBB`.
    pub color: String,
    /// Number of concepts the category contributes to the pool.
    pub concept_count: usize,
}
