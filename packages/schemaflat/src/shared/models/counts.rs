//! Per-category declaration counts

use serde::Serialize;

use super::EntityCategory;

/// Per-category count of emitted declarations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub tables: usize,
    pub views: usize,
    pub enums: usize,
    pub composite_types: usize,
    pub functions: usize,
}

impl CategoryCounts {
    pub fn record(&mut self, category: EntityCategory) {
        let slot = match category {
            EntityCategory::Table => &mut self.tables,
            EntityCategory::View => &mut self.views,
            EntityCategory::Enum => &mut self.enums,
            EntityCategory::CompositeType => &mut self.composite_types,
            EntityCategory::Function => &mut self.functions,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.tables + self.views + self.enums + self.composite_types + self.functions
    }
}
