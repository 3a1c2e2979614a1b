//! Recoup Core - record model, importer, and recovery pipeline.
//!
//! This crate contains the core business logic for the investment recovery
//! path calculator. It is I/O-agnostic apart from the CSV importer: the
//! pipeline itself is a pure function of the loaded records and the
//! configuration passed in at construction time.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod importer;
pub mod recovery;

// Re-export common types from the assets and recovery modules
pub use assets::*;
pub use recovery::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
