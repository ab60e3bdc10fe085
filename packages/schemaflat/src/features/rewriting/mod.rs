//! Rewriting Feature
//!
//! Post-extraction pass turning qualified `Database[...]` paths into
//! formatted names.

mod reference_rewriter;

pub use reference_rewriter::ReferenceRewriter;
