//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Node, Parser as TSParser, Tree};
use tracing::trace;

use super::languages::typescript::{is_opaque, map_node_kind};
use crate::errors::{Result, SchemaflatError};
use crate::features::parsing::domain::{SchemaTree, SyntaxNode};
use crate::features::parsing::ports::SchemaParser;
use crate::shared::models::Span;

/// Deepest syntax nesting accepted
///
/// Conversion and the owned tree are recursive; anything deeper is
/// rejected as a parse error instead of exhausting the stack. Generated
/// `Database` files stay well under 64 levels.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Tree-sitter based parser for TypeScript declaration files
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSitterParser;

impl TreeSitterParser {
    pub fn typescript() -> Self {
        Self
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        tree_sitter_typescript::language_typescript()
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str) -> SchemaTree {
        let root = self.convert_node(&tree.root_node(), None);
        SchemaTree::new(root, source.to_string())
    }

    /// Convert a tree-sitter node to SyntaxNode
    ///
    /// Anonymous tokens and extras (comments) are dropped.
    fn convert_node(&self, node: &Node, field: Option<&'static str>) -> SyntaxNode {
        let mut children = Vec::new();

        if !is_opaque(node.kind()) {
            let mut cursor = node.walk();
            if cursor.goto_first_child() {
                loop {
                    let child = cursor.node();
                    if child.is_named() && !child.is_extra() {
                        children.push(self.convert_node(&child, cursor.field_name()));
                    }
                    if !cursor.goto_next_sibling() {
                        break;
                    }
                }
            }
        }

        SyntaxNode::new(map_node_kind(node.kind()), node_to_span(node))
            .with_field(field)
            .with_raw_kind(node.kind())
            .with_children(children)
    }

    /// First node nested deeper than [`MAX_NESTING_DEPTH`], walked iteratively
    fn first_too_deep<'t>(&self, tree: &'t Tree) -> Option<Node<'t>> {
        let mut cursor = tree.walk();
        let mut depth = 0usize;
        loop {
            if depth > MAX_NESTING_DEPTH {
                return Some(cursor.node());
            }
            if cursor.goto_first_child() {
                depth += 1;
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return None;
                }
                depth -= 1;
            }
        }
    }

    /// Find the first ERROR or MISSING node in document order
    fn first_error<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }

        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        children.into_iter().find_map(|child| self.first_error(child))
    }
}

/// Convert tree-sitter position to Span (1-based lines and columns)
fn node_to_span(node: &Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();

    Span::new(
        start.row as u32 + 1,
        start.column as u32 + 1,
        end.row as u32 + 1,
        end.column as u32 + 1,
    )
    .with_bytes(node.start_byte(), node.end_byte())
}

impl SchemaParser for TreeSitterParser {
    fn parse(&self, source: &str) -> Result<SchemaTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| SchemaflatError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| SchemaflatError::parse("Failed to parse source text"))?;

        if let Some(deep) = self.first_too_deep(&tree) {
            let span = node_to_span(&deep);
            return Err(SchemaflatError::parse(format!(
                "nesting deeper than {} levels",
                MAX_NESTING_DEPTH
            ))
            .with_position(span.start_line, span.start_col));
        }

        let root = tree.root_node();
        if let Some(error) = self.first_error(root) {
            let span = node_to_span(&error);
            let message = if error.is_missing() {
                format!("missing `{}`", error.kind())
            } else {
                let snippet: String = source
                    .get(error.byte_range())
                    .unwrap_or("")
                    .chars()
                    .take(40)
                    .collect();
                format!("unexpected syntax `{}`", snippet.trim())
            };
            return Err(SchemaflatError::parse(message).with_position(span.start_line, span.start_col));
        }

        trace!(bytes = source.len(), "parsed schema description");
        Ok(self.convert_tree(&tree, source))
    }
}
