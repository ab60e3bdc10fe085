//! Declared-name resolution
//!
//! Total over the node shapes the parser produces: anything without a
//! nameable identifier resolves to `None`.

use crate::features::parsing::domain::{SchemaTree, SyntaxKind, SyntaxNode};

/// Declared identifier of a node
///
/// - type alias / interface: the declared type name
/// - property signature: the key, with string-literal keys unquoted
pub fn declared_name(node: &SyntaxNode, tree: &SchemaTree) -> Option<String> {
    match node.kind {
        SyntaxKind::TypeAlias | SyntaxKind::Interface => node
            .child_by_field("name")
            .map(|name| tree.text(name).to_string()),
        SyntaxKind::PropertySignature => {
            let key = node.child_by_field("name")?;
            match key.kind {
                SyntaxKind::PropertyName | SyntaxKind::NumberLiteral => {
                    Some(tree.text(key).to_string())
                }
                SyntaxKind::StringLiteral => Some(unquote(tree.text(key)).to_string()),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Strip one pair of matching `"` or `'` quotes
pub fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}
