//! Startup category table: the configuration that seeds the concept pool.
//!
//! The JSON form maps each category id to its color and labels:
//!
//! ```json
//! {
//!   "timor":  { "color": "#00AB55", "labels": ["Matak", "Matak"] },
//!   "health": { "color": "#FF0000", "labels": ["Mean"] }
//! }
//! ```
//!
//! Total concept count is the sum of all label lists. Duplicate labels are
//! distinct concepts.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Category, Concept, DisplayColor};
use crate::error::DrawError;

/// One category with the labels it contributes to the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    /// Category id and color.
    pub category: Category,
    /// Labels drawn from this category, one concept per entry.
    pub labels: Vec<String>,
}

/// Ordered, validated set of category definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    definitions: Vec<CategoryDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategory {
    color: String,
    #[serde(default)]
    labels: Vec<String>,
}

impl CategoryTable {
    /// Builds a table from definitions, validating category ids.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidCatalog`] if a category id is empty or
    /// appears more than once.
    pub fn new(definitions: Vec<CategoryDefinition>) -> Result<Self, DrawError> {
        let mut seen = std::collections::HashSet::with_capacity(definitions.len());
        for def in &definitions {
            if def.category.id.as_str().trim().is_empty() {
                return Err(DrawError::InvalidCatalog(
                    "category id must not be empty".to_string(),
                ));
            }
            if !seen.insert(def.category.id.clone()) {
                return Err(DrawError::InvalidCatalog(format!(
                    "duplicate category {}",
                    def.category.id
                )));
            }
        }
        Ok(Self { definitions })
    }

    /// Parses the JSON object form of the table. Categories are ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidCatalog`] on malformed JSON, an invalid
    /// color, or an empty category id.
    pub fn from_json(json: &str) -> Result<Self, DrawError> {
        let raw: BTreeMap<String, RawCategory> = serde_json::from_str(json)
            .map_err(|e| DrawError::InvalidCatalog(format!("malformed category table: {e}")))?;

        let mut definitions = Vec::with_capacity(raw.len());
        for (id, entry) in raw {
            let color: DisplayColor = entry.color.parse()?;
            definitions.push(CategoryDefinition {
                category: Category::new(id, color),
                labels: entry.labels,
            });
        }
        Self::new(definitions)
    }

    /// Returns the table used when no custom table is configured: five
    /// categories with three concepts each.
    #[must_use]
    pub fn builtin() -> Self {
        let define = |id: &str, color: DisplayColor, label: &str| CategoryDefinition {
            category: Category::new(id, color),
            labels: vec![label.to_string(); 3],
        };
        Self {
            definitions: vec![
                define("timor", DisplayColor::rgb(0x00, 0xAB, 0x55), "Matak"),
                define("entrepreneurship", DisplayColor::rgb(0x20, 0x65, 0xD1), "Azul"),
                define("youth", DisplayColor::rgb(0x00, 0x00, 0x00), "Metan"),
                define("sustainability", DisplayColor::rgb(0xFF, 0xB4, 0x00), "Kinur"),
                define("health", DisplayColor::rgb(0xFF, 0x00, 0x00), "Mean"),
            ],
        }
    }

    /// Returns the definitions in table order.
    #[must_use]
    pub fn definitions(&self) -> &[CategoryDefinition] {
        &self.definitions
    }

    /// Returns the categories in table order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.definitions.iter().map(|def| &def.category)
    }

    /// Sum of all label lists.
    #[must_use]
    pub fn total_concepts(&self) -> usize {
        self.definitions.iter().map(|def| def.labels.len()).sum()
    }

    /// Expands the table into one [`Concept`] per label.
    #[must_use]
    pub fn concepts(&self) -> Vec<Concept> {
        let mut concepts = Vec::with_capacity(self.total_concepts());
        for def in &self.definitions {
            for label in &def.labels {
                concepts.push(Concept::new(
                    label.clone(),
                    def.category.id.clone(),
                    def.category.color,
                ));
            }
        }
        concepts
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}
