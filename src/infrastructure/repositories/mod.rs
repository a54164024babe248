//! Repository Implementations
//!
//! Concrete implementations of the `LedgerStore` port.

mod json_ledger;
mod memory;

pub use json_ledger::{default_ledger_path, JsonLedgerRepository};
pub use memory::InMemoryLedgerStore;
