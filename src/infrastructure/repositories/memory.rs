//! In-memory ledger store
//!
//! Process-local collection behind a mutex. Used by tests and by callers
//! that do not want the ledger persisted.

use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::LedgerEntry;
use crate::domain::ports::{LedgerStore, LedgerStoreError};

#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    entries: Mutex<Vec<LedgerEntry>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LedgerEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<LedgerEntry>>, LedgerStoreError> {
        self.entries
            .lock()
            .map_err(|e| LedgerStoreError::AccessError {
                message: e.to_string(),
            })
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&self) -> Result<Vec<LedgerEntry>, LedgerStoreError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, entries: &[LedgerEntry]) -> Result<(), LedgerStoreError> {
        *self.lock()? = entries.to_vec();
        Ok(())
    }

    fn append(&self, entry: LedgerEntry) -> Result<(), LedgerStoreError> {
        self.lock()?.push(entry);
        Ok(())
    }
}
