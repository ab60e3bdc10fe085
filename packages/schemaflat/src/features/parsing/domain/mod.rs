//! Parsing domain models

mod schema_tree;
mod syntax_node;

pub use schema_tree::{Declaration, SchemaTree};
pub use syntax_node::{SyntaxKind, SyntaxNode};
