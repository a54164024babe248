//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Ledger store implementations (JSON file, in-memory)

pub mod repositories;

// Re-export for convenience
pub use repositories::{default_ledger_path, InMemoryLedgerStore, JsonLedgerRepository};
