//! Formatter Policy
//!
//! Four caller-supplied naming functions, one per axis. Each must be
//! deterministic: the rewriter relies on the same inputs producing the same
//! name.

use std::fmt;
use std::sync::Arc;

use crate::shared::models::{EntityCategory, RawEntity};

/// `(name) -> identifier`, used for enums and composite types
pub type NameFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// `(name, member) -> identifier`, used for tables/views and functions
pub type PairFormatter = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Resolved naming functions
#[derive(Clone)]
pub struct FormatterPolicy {
    enum_name: NameFormatter,
    composite_name: NameFormatter,
    table_name: PairFormatter,
    function_name: PairFormatter,
}

impl Default for FormatterPolicy {
    /// Identity for enums and composites, `name + op` for tables,
    /// `name + grouping` for functions
    fn default() -> Self {
        Self {
            enum_name: Arc::new(|name: &str| name.to_string()),
            composite_name: Arc::new(|name: &str| name.to_string()),
            table_name: Arc::new(|name: &str, operation: &str| format!("{name}{operation}")),
            function_name: Arc::new(|name: &str, grouping: &str| format!("{name}{grouping}")),
        }
    }
}

impl fmt::Debug for FormatterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterPolicy").finish_non_exhaustive()
    }
}

impl FormatterPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enum_formatter(mut self, f: NameFormatter) -> Self {
        self.enum_name = f;
        self
    }

    pub fn with_composite_formatter(mut self, f: NameFormatter) -> Self {
        self.composite_name = f;
        self
    }

    pub fn with_table_formatter(mut self, f: PairFormatter) -> Self {
        self.table_name = f;
        self
    }

    pub fn with_function_formatter(mut self, f: PairFormatter) -> Self {
        self.function_name = f;
        self
    }

    pub fn format_enum(&self, name: &str) -> String {
        (self.enum_name)(name)
    }

    pub fn format_composite(&self, name: &str) -> String {
        (self.composite_name)(name)
    }

    pub fn format_table(&self, name: &str, operation: &str) -> String {
        (self.table_name)(name, operation)
    }

    pub fn format_function(&self, name: &str, grouping: &str) -> String {
        (self.function_name)(name, grouping)
    }

    /// Dispatch on the entity's category with the documented arity
    pub fn format(&self, entity: &RawEntity) -> String {
        match entity.category {
            EntityCategory::Enum => self.format_enum(&entity.name),
            EntityCategory::CompositeType => self.format_composite(&entity.name),
            EntityCategory::Table | EntityCategory::View => {
                let operation = entity.operation.map(|op| op.as_str()).unwrap_or_default();
                self.format_table(&entity.name, operation)
            }
            EntityCategory::Function => {
                self.format_function(&entity.name, entity.grouping.as_deref().unwrap_or_default())
            }
        }
    }
}
