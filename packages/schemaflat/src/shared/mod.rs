//! Shared module - Common types used by every pipeline stage
//!
//! No tree-sitter here: parsing details stay in `features::parsing`.

pub mod models;

// Re-exports for convenience
pub use models::*;
