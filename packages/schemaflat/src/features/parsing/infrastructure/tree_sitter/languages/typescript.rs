//! TypeScript-specific tree-sitter configuration
//!
//! Node kind constants for the subset of the grammar that generated
//! `Database` type files use, and the mapping onto [`SyntaxKind`].

use crate::features::parsing::domain::SyntaxKind;

/// TypeScript tree-sitter node kinds
///
/// These constants match the exact node type names from tree-sitter-typescript grammar.
/// Source: https://github.com/tree-sitter/tree-sitter-typescript/blob/master/common/define-grammar.js
pub mod node_kinds {
    // Program structure
    pub const PROGRAM: &str = "program";
    pub const EXPORT_STATEMENT: &str = "export_statement";

    // Declarations
    pub const TYPE_ALIAS_DECLARATION: &str = "type_alias_declaration";
    pub const INTERFACE_DECLARATION: &str = "interface_declaration";

    // Structural types
    pub const OBJECT_TYPE: &str = "object_type";
    pub const INTERFACE_BODY: &str = "interface_body";
    pub const PROPERTY_SIGNATURE: &str = "property_signature";
    pub const INDEX_SIGNATURE: &str = "index_signature";
    pub const TYPE_ANNOTATION: &str = "type_annotation";
    pub const TUPLE_TYPE: &str = "tuple_type";
    pub const ARRAY_TYPE: &str = "array_type";

    // Type expressions
    pub const UNION_TYPE: &str = "union_type";
    pub const LITERAL_TYPE: &str = "literal_type";
    pub const GENERIC_TYPE: &str = "generic_type";
    pub const LOOKUP_TYPE: &str = "lookup_type";
    pub const TYPE_IDENTIFIER: &str = "type_identifier";
    pub const NESTED_TYPE_IDENTIFIER: &str = "nested_type_identifier";
    pub const PREDEFINED_TYPE: &str = "predefined_type";

    // Names and literals
    pub const PROPERTY_IDENTIFIER: &str = "property_identifier";
    pub const STRING: &str = "string";
    pub const NUMBER: &str = "number";
}

/// Map tree-sitter node kind to our SyntaxKind
pub fn map_node_kind(ts_kind: &str) -> SyntaxKind {
    match ts_kind {
        node_kinds::PROGRAM => SyntaxKind::Program,
        node_kinds::EXPORT_STATEMENT => SyntaxKind::ExportStatement,

        node_kinds::TYPE_ALIAS_DECLARATION => SyntaxKind::TypeAlias,
        node_kinds::INTERFACE_DECLARATION => SyntaxKind::Interface,

        // Interface bodies are object types under an alias
        node_kinds::OBJECT_TYPE | node_kinds::INTERFACE_BODY => SyntaxKind::ObjectType,
        node_kinds::PROPERTY_SIGNATURE => SyntaxKind::PropertySignature,
        node_kinds::INDEX_SIGNATURE => SyntaxKind::IndexSignature,
        node_kinds::TYPE_ANNOTATION => SyntaxKind::TypeAnnotation,
        node_kinds::TUPLE_TYPE => SyntaxKind::TupleType,
        node_kinds::ARRAY_TYPE => SyntaxKind::ArrayType,

        node_kinds::UNION_TYPE => SyntaxKind::UnionType,
        node_kinds::LITERAL_TYPE => SyntaxKind::LiteralType,
        node_kinds::GENERIC_TYPE => SyntaxKind::GenericType,
        node_kinds::LOOKUP_TYPE => SyntaxKind::LookupType,
        // `ns.Foo` names a type just like `Foo`
        node_kinds::TYPE_IDENTIFIER | node_kinds::NESTED_TYPE_IDENTIFIER => SyntaxKind::TypeIdentifier,
        node_kinds::PREDEFINED_TYPE => SyntaxKind::PredefinedType,

        node_kinds::PROPERTY_IDENTIFIER => SyntaxKind::PropertyName,
        node_kinds::STRING => SyntaxKind::StringLiteral,
        node_kinds::NUMBER => SyntaxKind::NumberLiteral,

        other => SyntaxKind::Other(other.to_string()),
    }
}

/// Leaf-like kinds whose inner structure is never inspected
///
/// Their children (string fragments, escape sequences) are not converted.
pub fn is_opaque(ts_kind: &str) -> bool {
    matches!(
        ts_kind,
        node_kinds::STRING | node_kinds::NUMBER | node_kinds::PROPERTY_IDENTIFIER
    )
}
