//! Draw-without-replacement pool of remaining concepts.

use rand::Rng;

use super::{CategoryTable, Concept};

/// Unordered collection of concepts not yet drawn.
///
/// A drawn concept is removed and never returns, except through
/// [`ConceptPool::restore`] when the caller could not record it.
#[derive(Debug, Clone, Default)]
pub struct ConceptPool {
    remaining: Vec<Concept>,
}

impl ConceptPool {
    /// Creates a pool holding every concept of the table.
    #[must_use]
    pub fn from_table(table: &CategoryTable) -> Self {
        Self {
            remaining: table.concepts(),
        }
    }

    /// Creates a pool from an explicit list of concepts.
    #[must_use]
    pub fn from_concepts(concepts: Vec<Concept>) -> Self {
        Self {
            remaining: concepts,
        }
    }

    /// Number of concepts still available.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Returns `true` once every concept has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Draws a uniformly random concept using the thread-local RNG.
    ///
    /// Returns `None` when the pool is exhausted.
    pub fn draw_random(&mut self) -> Option<Concept> {
        self.draw_random_with(&mut rand::thread_rng())
    }

    /// Draws a uniformly random concept using the given RNG.
    ///
    /// The index space is the current remaining size, so every call picks
    /// among exactly the concepts still in the pool.
    pub fn draw_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Concept> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }

    /// Puts a drawn concept back. Only used to undo a draw that could not
    /// be recorded.
    pub fn restore(&mut self, concept: Concept) {
        self.remaining.push(concept);
    }
}
