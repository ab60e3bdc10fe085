//! Transform configuration
//!
//! Builder with explicit optional fields, resolved once into an immutable
//! [`ValidatedConfig`] before the pipeline runs.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ConfigResult;
use super::validation::{validate_schema_name, Validatable};
use crate::features::formatting::{FormatterPolicy, NameFormatter, PairFormatter};
use crate::shared::models::OperationKind;

/// Schema extracted when none is configured
pub const DEFAULT_SCHEMA: &str = "public";

/// Per-operation switches for tables and views
///
/// `Row` is always emitted; each of the other operations is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OperationFlags {
    pub relationships: bool,
    pub inserts: bool,
    pub updates: bool,
    pub deletes: bool,
}

impl OperationFlags {
    pub fn all() -> Self {
        Self {
            relationships: true,
            inserts: true,
            updates: true,
            deletes: true,
        }
    }

    pub fn is_retained(&self, operation: OperationKind) -> bool {
        match operation {
            OperationKind::Row => true,
            OperationKind::Insert => self.inserts,
            OperationKind::Update => self.updates,
            OperationKind::Delete => self.deletes,
            OperationKind::Relationships => self.relationships,
        }
    }

    /// Field-wise OR, used when CLI flags are layered over a config file
    pub fn union(self, other: OperationFlags) -> Self {
        Self {
            relationships: self.relationships || other.relationships,
            inserts: self.inserts || other.inserts,
            updates: self.updates || other.updates,
            deletes: self.deletes || other.deletes,
        }
    }
}

/// Transform configuration builder
///
/// ```rust,ignore
/// let config = TransformConfig::new()
///     .schema("public")
///     .updates(true)
///     .enum_formatter(|name| name.to_uppercase())
///     .build()?;
/// ```
#[derive(Clone, Default)]
pub struct TransformConfig {
    /// Schema to extract (default `"public"`)
    schema: Option<String>,
    /// Default: identity
    enum_formatter: Option<NameFormatter>,
    /// Default: identity
    composite_formatter: Option<NameFormatter>,
    /// Default: `name + operation`
    table_formatter: Option<PairFormatter>,
    /// Default: `name + grouping`
    function_formatter: Option<PairFormatter>,
    /// Default: all off
    operations: OperationFlags,
}

impl std::fmt::Debug for TransformConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformConfig")
            .field("schema", &self.schema)
            .field("enum_formatter", &self.enum_formatter.is_some())
            .field("composite_formatter", &self.composite_formatter.is_some())
            .field("table_formatter", &self.table_formatter.is_some())
            .field("function_formatter", &self.function_formatter.is_some())
            .field("operations", &self.operations)
            .finish()
    }
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn enum_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.enum_formatter = Some(Arc::new(f));
        self
    }

    pub fn composite_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.composite_formatter = Some(Arc::new(f));
        self
    }

    /// Called with `(table_or_view_name, operation_name)`
    pub fn table_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.table_formatter = Some(Arc::new(f));
        self
    }

    /// Called with `(function_name, grouping_name)`
    pub fn function_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.function_formatter = Some(Arc::new(f));
        self
    }

    pub(crate) fn enum_formatter_arc(mut self, f: NameFormatter) -> Self {
        self.enum_formatter = Some(f);
        self
    }

    pub(crate) fn composite_formatter_arc(mut self, f: NameFormatter) -> Self {
        self.composite_formatter = Some(f);
        self
    }

    pub(crate) fn table_formatter_arc(mut self, f: PairFormatter) -> Self {
        self.table_formatter = Some(f);
        self
    }

    pub(crate) fn function_formatter_arc(mut self, f: PairFormatter) -> Self {
        self.function_formatter = Some(f);
        self
    }

    pub fn relationships(mut self, enabled: bool) -> Self {
        self.operations.relationships = enabled;
        self
    }

    pub fn inserts(mut self, enabled: bool) -> Self {
        self.operations.inserts = enabled;
        self
    }

    pub fn updates(mut self, enabled: bool) -> Self {
        self.operations.updates = enabled;
        self
    }

    pub fn deletes(mut self, enabled: bool) -> Self {
        self.operations.deletes = enabled;
        self
    }

    pub fn operations(mut self, operations: OperationFlags) -> Self {
        self.operations = operations;
        self
    }

    pub fn get_operations(&self) -> OperationFlags {
        self.operations
    }

    pub fn get_schema(&self) -> &str {
        self.schema.as_deref().unwrap_or(DEFAULT_SCHEMA)
    }

    /// Validate and resolve defaults
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        self.validate()?;

        let schema = self.get_schema().to_string();
        let mut formatters = FormatterPolicy::default();
        if let Some(f) = self.enum_formatter {
            formatters = formatters.with_enum_formatter(f);
        }
        if let Some(f) = self.composite_formatter {
            formatters = formatters.with_composite_formatter(f);
        }
        if let Some(f) = self.table_formatter {
            formatters = formatters.with_table_formatter(f);
        }
        if let Some(f) = self.function_formatter {
            formatters = formatters.with_function_formatter(f);
        }

        Ok(ValidatedConfig {
            schema,
            operations: self.operations,
            formatters,
        })
    }
}

impl Validatable for TransformConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_schema_name(self.get_schema())
    }

    fn config_name(&self) -> &'static str {
        "TransformConfig"
    }
}

/// Validated configuration (immutable, safe to use)
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    schema: String,
    operations: OperationFlags,
    formatters: FormatterPolicy,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            operations: OperationFlags::default(),
            formatters: FormatterPolicy::default(),
        }
    }
}

impl ValidatedConfig {
    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn operations(&self) -> OperationFlags {
        self.operations
    }

    pub fn formatters(&self) -> &FormatterPolicy {
        &self.formatters
    }

    pub fn is_retained(&self, operation: OperationKind) -> bool {
        self.operations.is_retained(operation)
    }

    /// Human-readable summary for logs
    pub fn describe(&self) -> String {
        let mut enabled = vec!["Row"];
        for op in [
            OperationKind::Insert,
            OperationKind::Update,
            OperationKind::Delete,
            OperationKind::Relationships,
        ] {
            if self.is_retained(op) {
                enabled.push(op.as_str());
            }
        }
        format!("schema={} operations=[{}]", self.schema, enabled.join(", "))
    }
}
