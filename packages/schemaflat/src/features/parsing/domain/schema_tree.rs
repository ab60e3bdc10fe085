//! Parsed schema description
//!
//! Immutable once produced; owned by a single pipeline invocation.

use super::syntax_node::{SyntaxKind, SyntaxNode};
use crate::shared::models::Span;

/// Parsed TypeScript declaration file
#[derive(Debug, Clone)]
pub struct SchemaTree {
    /// Root `program` node
    pub root: SyntaxNode,

    /// Source text, the node spans index into it
    pub source: String,
}

/// Top-level type declaration
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    /// `type_alias_declaration` or `interface_declaration`
    pub node: &'a SyntaxNode,
    /// Enclosing statement: the `export` wrapper when present, else `node`
    pub statement: &'a SyntaxNode,
}

impl SchemaTree {
    pub fn new(root: SyntaxNode, source: String) -> Self {
        Self { root, source }
    }

    /// Source text covered by a node
    pub fn text(&self, node: &SyntaxNode) -> &str {
        self.text_for_span(&node.span)
    }

    pub fn text_for_span(&self, span: &Span) -> &str {
        self.source.get(span.start_byte..span.end_byte).unwrap_or("")
    }

    /// Top-level type declarations in source order, `export` unwrapped
    pub fn declarations(&self) -> impl Iterator<Item = Declaration<'_>> {
        self.root.children.iter().filter_map(|statement| {
            if statement.kind.is_declaration() {
                return Some(Declaration {
                    node: statement,
                    statement,
                });
            }
            if statement.kind == SyntaxKind::ExportStatement {
                return statement
                    .child_by_field("declaration")
                    .filter(|decl| decl.kind.is_declaration())
                    .map(|node| Declaration { node, statement });
            }
            None
        })
    }
}
