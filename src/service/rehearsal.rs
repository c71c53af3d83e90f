//! Isolated practice pool for rehearsal draws.
//!
//! Rehearsal draws exercise the same selection logic as real draws but
//! consume from a private copy of the catalog. They never touch the
//! production pool or ledger and never reach observers.

use tokio::sync::Mutex;

use crate::domain::{CategoryTable, Concept, ConceptPool, Identity};

/// Result of one rehearsal draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RehearsalDraw {
    /// The drawn concept, or `None` once the rehearsal pool is empty.
    pub concept: Option<Concept>,
    /// Concepts left in the rehearsal pool.
    pub remaining: usize,
}

/// Unlimited-draw pool, separate from the production [`ConceptPool`].
#[derive(Debug)]
pub struct RehearsalPool {
    table: CategoryTable,
    pool: Mutex<ConceptPool>,
}

impl RehearsalPool {
    /// Creates a rehearsal pool seeded with every concept of `table`.
    #[must_use]
    pub fn new(table: CategoryTable) -> Self {
        let pool = ConceptPool::from_table(&table);
        Self {
            table,
            pool: Mutex::new(pool),
        }
    }

    /// Draws one concept. The same identity may draw any number of times.
    pub async fn draw(&self, identity: Identity) -> RehearsalDraw {
        let mut pool = self.pool.lock().await;
        let concept = pool.draw_random();
        let remaining = pool.remaining_count();
        drop(pool);

        match &concept {
            Some(c) => tracing::info!(%identity, concept = %c.label, remaining, "rehearsal draw"),
            None => tracing::info!(%identity, "rehearsal draw attempted but no concepts remain"),
        }
        RehearsalDraw { concept, remaining }
    }

    /// Refills the pool with the full catalog. Returns the new size.
    pub async fn reset(&self) -> usize {
        let mut pool = self.pool.lock().await;
        *pool = ConceptPool::from_table(&self.table);
        let size = pool.remaining_count();
        tracing::info!(size, "rehearsal pool reset");
        size
    }

    /// Number of concepts left in the rehearsal pool.
    pub async fn remaining_count(&self) -> usize {
        self.pool.lock().await.remaining_count()
    }
}
