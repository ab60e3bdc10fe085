//! Pipeline result types

use serde::Serialize;

pub use crate::shared::models::CategoryCounts;

/// What one transform did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    pub schema: String,
    pub database_found: bool,
    pub schema_found: bool,
    pub json_emitted: bool,
    /// Emitted declarations, Json excluded
    pub emitted: CategoryCounts,
    /// Dropped by the numeric-record filter
    pub dropped: usize,
    pub references_rewritten: usize,
}

impl TransformReport {
    pub fn declarations(&self) -> usize {
        self.emitted.total() + usize::from(self.json_emitted)
    }
}

/// Output text plus its report
#[derive(Debug, Clone, Default)]
pub struct Transformed {
    pub output: String,
    pub report: TransformReport,
}
