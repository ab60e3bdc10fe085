//! Pipeline stages, leaves first

pub mod parsing;
pub mod extraction;
pub mod formatting;
pub mod rewriting;
pub mod assembly;
