//! Domain events emitted by the draw allocator.
//!
//! Every committed draw emits a [`DrawEvent`] through the
//! [`super::EventBus`]. Events are forwarded to WebSocket observers in
//! commit order.

use serde::Serialize;

use super::{Identity, LedgerEntry};

/// Event published after a state mutation of the draw.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum DrawEvent {
    /// A participant was assigned a concept.
    ParticipantDrew {
        /// 1-based ledger position of the entry.
        sequence: u64,
        /// The committed ledger entry.
        #[serde(flatten)]
        entry: LedgerEntry,
        /// Concepts left in the pool after this draw.
        remaining: usize,
    },
}

impl DrawEvent {
    /// Returns the commit sequence of the event.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        match self {
            Self::ParticipantDrew { sequence, .. } => *sequence,
        }
    }

    /// Returns the participant the event concerns.
    #[must_use]
    pub const fn identity(&self) -> Identity {
        match self {
            Self::ParticipantDrew { entry, .. } => entry.identity,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::domain::{CategoryId, Concept, DisplayColor};

    fn make_event() -> DrawEvent {
        DrawEvent::ParticipantDrew {
            sequence: 4,
            entry: LedgerEntry::new(
                Identity::from(Ipv4Addr::new(10, 0, 0, 9)),
                Concept::new(
                    "Azul",
                    CategoryId::from("entrepreneurship"),
                    DisplayColor::rgb(0x20, 0x65, 0xD1),
                ),
            ),
            remaining: 11,
        }
    }

    #[test]
    fn participant_drew_accessors() {
        let event = make_event();
        assert_eq!(event.sequence(), 4);
        assert_eq!(event.identity().to_string(), "10.0.0.9");
    }

    #[test]
    fn serializes_flat_with_tag() {
        let Ok(value) = serde_json::to_value(make_event()) else {
            panic!("serialization failed");
        };
        assert_eq!(value.get("event_type").and_then(|v| v.as_str()), Some("participant_drew"));
        assert_eq!(value.get("ip").and_then(|v| v.as_str()), Some("10.0.0.9"));
        assert_eq!(value.get("concept").and_then(|v| v.as_str()), Some("Azul"));
        assert_eq!(value.get("category").and_then(|v| v.as_str()), Some("entrepreneurship"));
        assert_eq!(value.get("color").and_then(|v| v.as_str()), Some("#2065D1"));
        assert_eq!(value.get("remaining").and_then(serde_json::Value::as_u64), Some(11));
        assert!(value.get("timestamp").is_some());
    }
}
