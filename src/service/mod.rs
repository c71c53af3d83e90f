//! Service layer: draw orchestration.
//!
//! [`DrawService`] owns the concept pool and allocation ledger, serializes
//! every draw, and emits events through the [`super::domain::EventBus`].
//! [`RehearsalPool`] is an isolated pool for practice draws.

pub mod draw_service;
pub mod rehearsal;

pub use draw_service::{DrawOutcome, DrawService, StatusReport};
pub use rehearsal::{RehearsalDraw, RehearsalPool};
