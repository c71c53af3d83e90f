//! Draw service: assigns one concept per identity and emits events.

use tokio::sync::{RwLock, broadcast};

use crate::domain::{
    AllocationLedger, AlreadyRecorded, CategoryTable, ConceptPool, DrawEvent, DrawSnapshot,
    EventBus, Identity, LedgerEntry,
};
use crate::error::DrawError;

/// Result of a draw attempt for a valid identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A concept was removed from the pool and recorded for the identity.
    Assigned {
        /// The new ledger entry.
        entry: LedgerEntry,
        /// Concepts left after this draw.
        remaining: usize,
    },
    /// The identity already drew; nothing changed.
    AlreadyDrawn {
        /// The entry recorded by the earlier draw.
        entry: LedgerEntry,
        /// Concepts currently left.
        remaining: usize,
    },
    /// The identity has not drawn but the pool is empty; nothing changed.
    Exhausted,
}

/// Read-only view of one identity's draw state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    /// The identity has drawn.
    Drawn(LedgerEntry),
    /// The identity has not drawn yet.
    NotDrawn {
        /// Concepts currently left.
        remaining: usize,
    },
}

/// Pool and ledger, always mutated together under one lock.
#[derive(Debug)]
struct DrawState {
    pool: ConceptPool,
    ledger: AllocationLedger,
}

/// Orchestration layer for the draw.
///
/// Owns the only mutable copy of the pool and ledger. Every draw follows
/// the pattern: acquire write lock → check ledger → draw from pool →
/// record → publish event → release lock. Nothing in that sequence
/// awaits, and publishing is a non-blocking ring-buffer push, so event
/// order on the bus equals ledger commit order.
///
/// # Concurrency
///
/// - Draws are fully serialized.
/// - Status queries and snapshots share a read lock and never observe a
///   half-applied draw.
/// - `|ledger| + |pool| == total_concepts` holds whenever the lock is free.
#[derive(Debug)]
pub struct DrawService {
    table: CategoryTable,
    state: RwLock<DrawState>,
    event_bus: EventBus,
}

impl DrawService {
    /// Creates a service whose pool holds every concept of `table`.
    #[must_use]
    pub fn new(table: CategoryTable, event_bus: EventBus) -> Self {
        let pool = ConceptPool::from_table(&table);
        Self {
            table,
            state: RwLock::new(DrawState {
                pool,
                ledger: AllocationLedger::new(),
            }),
            event_bus,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns the category table the pool was seeded from.
    #[must_use]
    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Pool size at startup.
    #[must_use]
    pub fn total_concepts(&self) -> usize {
        self.table.total_concepts()
    }

    /// Resolves `raw_address` and draws for the resulting identity.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidIdentity`] if the address does not
    /// resolve; no state is touched in that case.
    pub async fn draw(&self, raw_address: &str) -> Result<DrawOutcome, DrawError> {
        let identity = Identity::resolve(raw_address)?;
        Ok(self.draw_for(identity).await)
    }

    /// Draws a concept for an already-resolved identity.
    pub async fn draw_for(&self, identity: Identity) -> DrawOutcome {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        if let Some(existing) = state.ledger.lookup(&identity) {
            let remaining = state.pool.remaining_count();
            tracing::warn!(%identity, remaining, "repeat draw attempt blocked");
            return DrawOutcome::AlreadyDrawn {
                entry: existing.clone(),
                remaining,
            };
        }

        let Some(concept) = state.pool.draw_random() else {
            tracing::info!(%identity, "draw attempted but no concepts remain");
            return DrawOutcome::Exhausted;
        };

        let entry = LedgerEntry::new(identity, concept);
        let sequence = match state.ledger.record(entry.clone()) {
            Ok(sequence) => sequence,
            // Not reachable while the guard is held: the lookup above found
            // no entry. The concept still goes back so it cannot be lost.
            Err(AlreadyRecorded { rejected, existing }) => {
                state.pool.restore(rejected.to_concept());
                return DrawOutcome::AlreadyDrawn {
                    entry: existing,
                    remaining: state.pool.remaining_count(),
                };
            }
        };
        let remaining = state.pool.remaining_count();

        let observers = self.event_bus.publish(DrawEvent::ParticipantDrew {
            sequence,
            entry: entry.clone(),
            remaining,
        });
        drop(guard);

        tracing::info!(
            %identity,
            concept = %entry.concept,
            category = %entry.category,
            remaining,
            observers,
            "concept drawn"
        );
        DrawOutcome::Assigned { entry, remaining }
    }

    /// Reports whether `raw_address` has drawn, without mutating anything.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidIdentity`] if the address does not
    /// resolve.
    pub async fn status(&self, raw_address: &str) -> Result<StatusReport, DrawError> {
        let identity = Identity::resolve(raw_address)?;
        Ok(self.status_for(identity).await)
    }

    /// Reports the draw state of an already-resolved identity.
    pub async fn status_for(&self, identity: Identity) -> StatusReport {
        let state = self.state.read().await;
        match state.ledger.lookup(&identity) {
            Some(entry) => StatusReport::Drawn(entry.clone()),
            None => StatusReport::NotDrawn {
                remaining: state.pool.remaining_count(),
            },
        }
    }

    /// Number of concepts still in the pool.
    pub async fn remaining_count(&self) -> usize {
        self.state.read().await.pool.remaining_count()
    }

    /// Captures the full ledger plus statistics at one consistent instant.
    pub async fn snapshot(&self) -> DrawSnapshot {
        let state = self.state.read().await;
        DrawSnapshot::capture(&self.table, &state.ledger, state.pool.remaining_count())
    }

    /// Registers a new observer.
    ///
    /// The snapshot and the receiver are taken under the same lock, so every
    /// committed draw shows up exactly once for the observer: inside the
    /// snapshot, or as a later event on the receiver.
    pub async fn subscribe(&self) -> (DrawSnapshot, broadcast::Receiver<DrawEvent>) {
        let state = self.state.read().await;
        let receiver = self.event_bus.subscribe();
        let snapshot =
            DrawSnapshot::capture(&self.table, &state.ledger, state.pool.remaining_count());
        (snapshot, receiver)
    }
}
