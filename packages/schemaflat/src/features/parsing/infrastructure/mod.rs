//! Parsing infrastructure - external dependencies

mod name_resolver;
pub mod tree_sitter;

pub use name_resolver::{declared_name, unquote};
pub use self::tree_sitter::TreeSitterParser;
