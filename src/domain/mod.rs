//! Domain Layer
//!
//! The calculation engine and ledger model: pure business logic without
//! I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Input, result and ledger records
//! - `value_objects/` - Categorical attributes, emission factors, ids
//! - `services/` - Calculator and ledger aggregation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Persistence goes through the `LedgerStore` port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
