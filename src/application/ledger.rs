//! Historical Ledger
//!
//! Append-only history of saved calculations over an injected
//! `LedgerStore`. Storage failures never reach the caller: reads fall back
//! to an empty collection and failed writes are dropped, both with a
//! logged warning. The `try_*` variants expose the error instead.

use crate::domain::entities::{LedgerEntry, LedgerSummary, TrendPoint};
use crate::domain::ports::{LedgerStore, LedgerStoreError};
use crate::domain::services;

pub struct Ledger<S>
where
    S: LedgerStore,
{
    store: S,
}

impl<S> Ledger<S>
where
    S: LedgerStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append an entry; returns whether it was persisted.
    ///
    /// Entries are never deduplicated: appending the same calculation twice
    /// records two entries.
    pub fn append(&self, entry: LedgerEntry) -> bool {
        let id = entry.calculation_id.clone();
        match self.try_append(entry) {
            Ok(()) => {
                tracing::debug!(calculation_id = %id, "saved calculation to ledger");
                true
            }
            Err(e) => {
                tracing::warn!(calculation_id = %id, error = %e, "failed to save calculation");
                false
            }
        }
    }

    pub fn try_append(&self, entry: LedgerEntry) -> Result<(), LedgerStoreError> {
        self.store.append(entry)
    }

    /// Every entry in insertion order; empty if the store cannot be read
    pub fn list_all(&self) -> Vec<LedgerEntry> {
        self.try_list_all().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load ledger, using empty history");
            Vec::new()
        })
    }

    pub fn try_list_all(&self) -> Result<Vec<LedgerEntry>, LedgerStoreError> {
        self.store.load()
    }

    pub fn summarize(&self) -> LedgerSummary {
        services::summarize(&self.list_all())
    }

    /// Trend series ordered by calculation date ascending
    pub fn trend(&self) -> Vec<TrendPoint> {
        services::trend(&self.list_all())
    }
}
