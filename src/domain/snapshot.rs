//! Full-state snapshot handed to new observers and the monitor endpoint.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::{AllocationLedger, CategoryId, CategoryTable, LedgerEntry};

/// Aggregate counters over the ledger and pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DrawStats {
    /// Number of identities that have drawn.
    pub total_participants: usize,
    /// Concepts still in the pool.
    pub remaining_concepts: usize,
    /// Pool size at startup.
    pub total_concepts: usize,
    /// Assigned concepts per category; every category of the table is
    /// present, including those with zero assignments.
    #[schema(value_type = Object)]
    pub category_stats: BTreeMap<CategoryId, usize>,
}

/// Complete current ledger plus statistics, taken at one consistent instant.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DrawSnapshot {
    /// Ledger entries in commit order.
    pub participants: Vec<LedgerEntry>,
    /// Aggregate statistics.
    pub stats: DrawStats,
}

impl DrawSnapshot {
    /// Captures the ledger and pool counters. The caller must hold the
    /// state lock so both views belong to the same instant.
    #[must_use]
    pub fn capture(
        table: &CategoryTable,
        ledger: &AllocationLedger,
        remaining_concepts: usize,
    ) -> Self {
        let category_stats = table
            .categories()
            .map(|category| (category.id.clone(), ledger.count_in(&category.id)))
            .collect();

        Self {
            participants: ledger.entries().to_vec(),
            stats: DrawStats {
                total_participants: ledger.len(),
                remaining_concepts,
                total_concepts: table.total_concepts(),
                category_stats,
            },
        }
    }
}
