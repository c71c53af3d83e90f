//! Data Transfer Objects for REST request/response serialization.
//!
//! Colors are rendered as `#RRGGBB` strings and timestamps as ISO-8601.

pub mod draw_dto;
pub mod rehearsal_dto;

pub use draw_dto::*;
pub use rehearsal_dto::*;
