//! Parser port (interface)
//!
//! Defines the contract for turning source text into a [`SchemaTree`].

use crate::errors::Result;
use crate::features::parsing::domain::SchemaTree;

/// Parser trait - abstraction over parsing implementation
///
/// Implementations are syntax-only and side-effect free. A malformed
/// source is a `Parse` error, never a partial tree.
pub trait SchemaParser: Send + Sync {
    /// Parse source text into a SchemaTree
    fn parse(&self, source: &str) -> Result<SchemaTree>;
}
