//! Extraction Feature
//!
//! Locates the configured schema inside the `Database` declaration and
//! collects formatted entities plus the reference table.

mod extractor;
mod reference_table;

pub use extractor::{EntityExtractor, ExtractedCatalog, DATABASE_ROOT, JSON_DECLARATION};
pub use reference_table::{ReferenceKey, ReferenceTable};
