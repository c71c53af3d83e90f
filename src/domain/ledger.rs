//! Identity-to-draw ledger with at-most-one entry per identity.
//!
//! Entries are kept in commit order so snapshots list participants in the
//! order they drew; a hash index gives O(1) lookup by identity.

use std::collections::HashMap;

use super::{CategoryId, Identity, LedgerEntry};

/// Rejected [`AllocationLedger::record`] call.
///
/// Carries the entry that was not recorded so the caller can undo
/// whatever it consumed to build it, plus the entry that stays.
#[derive(Debug, thiserror::Error)]
#[error("identity {} already has a ledger entry", .rejected.identity)]
pub struct AlreadyRecorded {
    /// The entry that was refused.
    pub rejected: LedgerEntry,
    /// The entry already on record for the identity.
    pub existing: LedgerEntry,
}

/// Mapping from [`Identity`] to its [`LedgerEntry`].
#[derive(Debug, Default)]
pub struct AllocationLedger {
    entries: Vec<LedgerEntry>,
    index: HashMap<Identity, usize>,
}

impl AllocationLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry recorded for `identity`, if any.
    #[must_use]
    pub fn lookup(&self, identity: &Identity) -> Option<&LedgerEntry> {
        self.index
            .get(identity)
            .and_then(|&position| self.entries.get(position))
    }

    /// Records `entry` under its identity. Check and insert happen in one
    /// step; an existing entry is never overwritten.
    ///
    /// Returns the 1-based commit sequence of the new entry.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyRecorded`] (holding the refused and the existing
    /// entry) if the identity already has an entry.
    pub fn record(&mut self, entry: LedgerEntry) -> Result<u64, AlreadyRecorded> {
        if let Some(existing) = self.lookup(&entry.identity) {
            return Err(AlreadyRecorded {
                existing: existing.clone(),
                rejected: entry,
            });
        }
        let position = self.entries.len();
        self.index.insert(entry.identity, position);
        self.entries.push(entry);
        Ok(self.entries.len() as u64)
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in commit order.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of entries whose concept belongs to `category`.
    #[must_use]
    pub fn count_in(&self, category: &CategoryId) -> usize {
        self.entries
            .iter()
            .filter(|entry| &entry.category == category)
            .count()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::domain::{Concept, DisplayColor};

    fn entry(last_octet: u8, label: &str, category: &str) -> LedgerEntry {
        LedgerEntry::new(
            Identity::from(Ipv4Addr::new(10, 0, 0, last_octet)),
            Concept::new(label, CategoryId::from(category), DisplayColor::default()),
        )
    }

    #[test]
    fn record_then_lookup() {
        let mut ledger = AllocationLedger::new();
        assert!(ledger.is_empty());

        let e = entry(1, "x", "A");
        let identity = e.identity;
        assert_eq!(ledger.record(e).ok(), Some(1));

        let Some(found) = ledger.lookup(&identity) else {
            panic!("entry should be recorded");
        };
        assert_eq!(found.concept, "x");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn lookup_unknown_identity_is_none() {
        let ledger = AllocationLedger::new();
        assert!(ledger.lookup(&Identity::from(Ipv4Addr::LOCALHOST)).is_none());
    }

    #[test]
    fn second_record_for_same_identity_is_rejected_without_overwrite() {
        let mut ledger = AllocationLedger::new();
        assert!(ledger.record(entry(1, "x", "A")).is_ok());

        let Err(AlreadyRecorded { rejected, existing }) = ledger.record(entry(1, "y", "A")) else {
            panic!("duplicate identity must be rejected");
        };
        assert_eq!(rejected.concept, "y");
        assert_eq!(existing.concept, "x");

        let Some(kept) = ledger.lookup(&rejected.identity) else {
            panic!("first entry missing");
        };
        assert_eq!(kept.concept, "x");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn entries_keep_commit_order_and_sequence() {
        let mut ledger = AllocationLedger::new();
        assert_eq!(ledger.record(entry(3, "a", "A")).ok(), Some(1));
        assert_eq!(ledger.record(entry(1, "b", "B")).ok(), Some(2));
        assert_eq!(ledger.record(entry(2, "c", "A")).ok(), Some(3));

        let labels: Vec<&str> = ledger.entries().iter().map(|e| e.concept.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn count_in_category() {
        let mut ledger = AllocationLedger::new();
        let _ = ledger.record(entry(1, "a", "A"));
        let _ = ledger.record(entry(2, "b", "B"));
        let _ = ledger.record(entry(3, "c", "A"));

        assert_eq!(ledger.count_in(&CategoryId::from("A")), 2);
        assert_eq!(ledger.count_in(&CategoryId::from("B")), 1);
        assert_eq!(ledger.count_in(&CategoryId::from("C")), 0);
    }
}
