//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//! - Installing the `tracing` subscriber for the binary
//!
//! ## Structure
//!
//! - `cli` - Argument definitions and input assembly
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `format` - Number and currency formatting
//! - `logging` - Diagnostic output setup
//! - `output` - Text and JSON renderers

pub mod cli;
pub mod factory;
pub mod format;
pub mod logging;
pub mod output;

pub use factory::{create_calculate_use_case, create_ledger, ConcreteCalculateUseCase};
