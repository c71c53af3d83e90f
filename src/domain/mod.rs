//! Domain layer: draw value types, state containers, and event system.
//!
//! This module contains the category table that seeds the draw, the
//! concept pool, identity resolution, the allocation ledger, snapshot
//! types, and the event bus for broadcasting committed draws.

pub mod category;
pub mod category_table;
pub mod concept;
pub mod concept_pool;
pub mod draw_event;
pub mod event_bus;
pub mod identity;
pub mod ledger;
pub mod ledger_entry;
pub mod snapshot;

pub use category::{Category, CategoryId, DisplayColor};
pub use category_table::{CategoryDefinition, CategoryTable};
pub use concept::Concept;
pub use concept_pool::ConceptPool;
pub use draw_event::DrawEvent;
pub use event_bus::EventBus;
pub use identity::Identity;
pub use ledger::{AllocationLedger, AlreadyRecorded};
pub use ledger_entry::LedgerEntry;
pub use snapshot::{DrawSnapshot, DrawStats};
