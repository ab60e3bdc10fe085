//! Owned syntax node representation
//!
//! Abstracts tree-sitter nodes for use in extraction logic. Only the node
//! kinds that occur in generated database type files get their own variant.

use crate::shared::models::Span;

/// Syntax node kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    // Top level
    Program,
    ExportStatement,

    // Declarations
    TypeAlias,
    Interface,

    // Structural types
    ObjectType,
    PropertySignature,
    IndexSignature,
    TypeAnnotation,
    TupleType,
    ArrayType,

    // Type expressions
    UnionType,
    LiteralType,
    GenericType,
    LookupType,
    TypeIdentifier,
    PredefinedType,

    // Names and literals
    PropertyName,
    StringLiteral,
    NumberLiteral,

    // Unknown/Other
    Other(String),
}

impl SyntaxKind {
    pub fn is_declaration(&self) -> bool {
        matches!(self, SyntaxKind::TypeAlias | SyntaxKind::Interface)
    }

    /// `{ ... }` in type position (interface bodies included)
    pub fn is_record(&self) -> bool {
        matches!(self, SyntaxKind::ObjectType)
    }
}

/// Owned syntax node
///
/// Text is not copied into nodes; slice it out of the owning
/// [`SchemaTree`](super::SchemaTree) with the node's span.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,
    /// Field name under the parent (`name`, `value`, `type`, `body`)
    pub field: Option<&'static str>,
    pub children: Vec<SyntaxNode>,

    /// Original tree-sitter kind (for debugging)
    pub raw_kind: Option<String>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self {
            kind,
            span,
            field: None,
            children: Vec::new(),
            raw_kind: None,
        }
    }

    pub fn with_field(mut self, field: Option<&'static str>) -> Self {
        self.field = field;
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_raw_kind(mut self, raw_kind: impl Into<String>) -> Self {
        self.raw_kind = Some(raw_kind.into());
        self
    }

    /// Find first child of given kind
    pub fn find_child(&self, kind: &SyntaxKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| &c.kind == kind)
    }

    /// Find all children of given kind
    pub fn find_children(&self, kind: &SyntaxKind) -> Vec<&SyntaxNode> {
        self.children.iter().filter(|c| &c.kind == kind).collect()
    }

    /// Find child by tree-sitter field name
    pub fn child_by_field(&self, field: &str) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.field == Some(field))
    }

    /// First child, for wrapper nodes like `type_annotation`
    pub fn first_child(&self) -> Option<&SyntaxNode> {
        self.children.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_kind_is_declaration() {
        assert!(SyntaxKind::TypeAlias.is_declaration());
        assert!(SyntaxKind::Interface.is_declaration());
        assert!(!SyntaxKind::ObjectType.is_declaration());
    }

    #[test]
    fn test_child_by_field() {
        let name = SyntaxNode::new(SyntaxKind::TypeIdentifier, Span::zero()).with_field(Some("name"));
        let value = SyntaxNode::new(SyntaxKind::ObjectType, Span::zero()).with_field(Some("value"));
        let alias = SyntaxNode::new(SyntaxKind::TypeAlias, Span::zero()).with_children(vec![name, value]);

        assert_eq!(alias.child_by_field("value").map(|n| &n.kind), Some(&SyntaxKind::ObjectType));
        assert!(alias.child_by_field("body").is_none());
        assert_eq!(alias.find_children(&SyntaxKind::TypeIdentifier).len(), 1);
    }
}
