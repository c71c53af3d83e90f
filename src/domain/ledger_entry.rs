//! Ledger entry recording one participant's draw.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{CategoryId, Concept, DisplayColor, Identity};

/// Immutable record of a successful draw.
///
/// Created exactly once per identity and never deleted during the process
/// lifetime. Serializes with the field names the monitor expects
/// (`ip`, `concept`, `category`, `color`, `timestamp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LedgerEntry {
    /// Participant that drew.
    #[serde(rename = "ip")]
    #[schema(value_type = String, example = "10.0.0.1")]
    pub identity: Identity,

    /// Drawn concept label.
    pub concept: String,

    /// Category of the drawn concept.
    pub category: CategoryId,

    /// Display color of the category.
    #[schema(value_type = String, example = "#00AB55")]
    pub color: DisplayColor,

    /// Capture time of the draw.
    pub timestamp: DateTime<Utc>,
}

impl LedgerEntry {
    /// Builds an entry for `identity` from a freshly drawn concept,
    /// stamped with the current time.
    #[must_use]
    pub fn new(identity: Identity, concept: Concept) -> Self {
        Self {
            identity,
            concept: concept.label,
            category: concept.category,
            color: concept.color,
            timestamp: Utc::now(),
        }
    }

    /// Reconstructs the concept this entry consumed.
    #[must_use]
    pub fn to_concept(&self) -> Concept {
        Concept::new(self.concept.clone(), self.category.clone(), self.color)
    }
}
