//! LedgerStore port - abstraction for ledger persistence
//!
//! The ledger is a single named collection of entries. Adapters only need
//! to load and save it whole; `append` has a read-modify-write default that
//! adapters shared between writers should override with an atomic version.

use std::path::PathBuf;

use crate::domain::entities::LedgerEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerStoreError {
    #[error("failed to access ledger: {message}")]
    AccessError { message: String },

    #[error("failed to serialize ledger: {message}")]
    SerializationError { message: String },

    #[error("ledger file corrupted: {path}\n  → Details: {message}")]
    Corrupted { path: PathBuf, message: String },
}

pub trait LedgerStore: Send + Sync {
    /// Load the whole collection; a store that was never written is empty
    fn load(&self) -> Result<Vec<LedgerEntry>, LedgerStoreError>;

    /// Replace the whole collection
    fn save(&self, entries: &[LedgerEntry]) -> Result<(), LedgerStoreError>;

    /// Add one entry at the end of the collection
    fn append(&self, entry: LedgerEntry) -> Result<(), LedgerStoreError> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.save(&entries)
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Box<S> {
    fn load(&self) -> Result<Vec<LedgerEntry>, LedgerStoreError> {
        (**self).load()
    }

    fn save(&self, entries: &[LedgerEntry]) -> Result<(), LedgerStoreError> {
        (**self).save(entries)
    }

    fn append(&self, entry: LedgerEntry) -> Result<(), LedgerStoreError> {
        (**self).append(entry)
    }
}
