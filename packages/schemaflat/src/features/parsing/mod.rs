//! Parsing Feature
//!
//! Turns generated TypeScript declaration text into an owned syntax tree and
//! resolves declared names.
//!
//! ## Structure
//! - `domain/` - SchemaTree, SyntaxNode models
//! - `ports/` - SchemaParser trait
//! - `infrastructure/` - TreeSitterParser, name resolution

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{Declaration, SchemaTree, SyntaxKind, SyntaxNode};
pub use infrastructure::{declared_name, TreeSitterParser};
pub use ports::SchemaParser;
