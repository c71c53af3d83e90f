//! Drawable concept value.

use serde::Serialize;

use super::{CategoryId, DisplayColor};

/// A single drawable item.
///
/// Created from the category table at startup and never mutated. The
/// category color is resolved once at construction so a drawn concept
/// always carries the color it is displayed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concept {
    /// Human-readable label (labels may repeat across concepts).
    pub label: String,
    /// Category this concept belongs to.
    pub category: CategoryId,
    /// Display color of [`Self::category`].
    pub color: DisplayColor,
}

impl Concept {
    /// Creates a new concept.
    #[must_use]
    pub fn new(label: impl Into<String>, category: CategoryId, color: DisplayColor) -> Self {
        Self {
            label: label.into(),
            category,
            color,
        }
    }
}
