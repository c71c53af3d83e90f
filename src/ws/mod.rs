//! WebSocket layer: observer connections and message envelopes.
//!
//! The WebSocket endpoint at `/ws` seeds each observer with the full draw
//! snapshot and then pushes every committed draw in real time.

pub mod connection;
pub mod handler;
pub mod messages;
