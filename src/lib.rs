//! # concept-draw
//!
//! Draw-once concept allocator with a REST API and a real-time WebSocket
//! monitor feed.
//!
//! Every participant, identified by its IPv4 address, draws exactly one
//! random concept from a fixed categorized pool. Draws are serialized, so
//! no concept is ever handed out twice or lost, and every committed draw
//! is pushed to connected monitors in commit order.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── DrawService, RehearsalPool (service/)
//!     ├── EventBus (domain/)
//!     │
//!     └── ConceptPool + AllocationLedger (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
