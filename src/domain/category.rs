//! Category identity and display color.
//!
//! [`CategoryId`] is a newtype over the category key used in the category
//! table (e.g. `"timor"`). [`DisplayColor`] is a validated RGB triple that
//! serializes as a `#RRGGBB` hex string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DrawError;

/// Key of a concept category.
///
/// Fixed at startup from the category table and never mutated. Used as the
/// grouping key for per-category statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a `CategoryId` from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// RGB display color of a category.
///
/// Parsed from and rendered as `#RRGGBB` (case-insensitive on input,
/// uppercase on output).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl DisplayColor {
    /// Creates a color from its three channels.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for DisplayColor {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DrawError::InvalidCatalog(format!("invalid color {s:?}: expected #RRGGBB"));

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .ok_or_else(invalid)
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for DisplayColor {
    type Error = DrawError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayColor> for String {
    fn from(color: DisplayColor) -> Self {
        color.to_string()
    }
}

/// Immutable category value: id plus display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    /// Category key.
    pub id: CategoryId,
    /// Color shown for concepts of this category.
    #[schema(value_type = String, example = "#00AB55")]
    pub color: DisplayColor,
}

impl Category {
    /// Creates a new category.
    #[must_use]
    pub fn new(id: impl Into<String>, color: DisplayColor) -> Self {
        Self {
            id: CategoryId::new(id),
            color,
        }
    }
}
