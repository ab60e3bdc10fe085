//! Entity models
//!
//! The closed set of things the extractor can find inside one schema of the
//! generated `Database` type, before and after naming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity category
///
/// Tables and views share the same shape (row/insert/update/... operations)
/// and the same naming function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Table,
    View,
    Enum,
    CompositeType,
    Function,
}

impl EntityCategory {
    /// All categories in emission order
    pub const ALL: [EntityCategory; 5] = [
        EntityCategory::Table,
        EntityCategory::View,
        EntityCategory::Enum,
        EntityCategory::CompositeType,
        EntityCategory::Function,
    ];

    /// Key of the grouping inside a schema (`Database["public"]["Tables"]`)
    pub fn group_key(&self) -> &'static str {
        match self {
            EntityCategory::Table => "Tables",
            EntityCategory::View => "Views",
            EntityCategory::Enum => "Enums",
            EntityCategory::CompositeType => "CompositeTypes",
            EntityCategory::Function => "Functions",
        }
    }

    pub fn from_group_key(key: &str) -> Option<Self> {
        match key {
            "Tables" => Some(EntityCategory::Table),
            "Views" => Some(EntityCategory::View),
            "Enums" => Some(EntityCategory::Enum),
            "CompositeTypes" => Some(EntityCategory::CompositeType),
            "Functions" => Some(EntityCategory::Function),
            _ => None,
        }
    }

    /// Whether other entities may refer to this one by qualified path
    pub fn is_referenceable(&self) -> bool {
        matches!(self, EntityCategory::Enum | EntityCategory::CompositeType)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Table => "table",
            EntityCategory::View => "view",
            EntityCategory::Enum => "enum",
            EntityCategory::CompositeType => "composite_type",
            EntityCategory::Function => "function",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table/view operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Row,
    Insert,
    Update,
    Delete,
    Relationships,
}

impl OperationKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Row" => Some(OperationKind::Row),
            "Insert" => Some(OperationKind::Insert),
            "Update" => Some(OperationKind::Update),
            "Delete" => Some(OperationKind::Delete),
            "Relationships" => Some(OperationKind::Relationships),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Row => "Row",
            OperationKind::Insert => "Insert",
            OperationKind::Update => "Update",
            OperationKind::Delete => "Delete",
            OperationKind::Relationships => "Relationships",
        }
    }

    /// Relationships are a tuple of foreign-key descriptors, not a record
    pub fn expects_tuple(&self) -> bool {
        matches!(self, OperationKind::Relationships)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity as found in the source, body text untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntity {
    pub category: EntityCategory,
    pub name: String,
    /// Operation for tables/views
    pub operation: Option<OperationKind>,
    /// Sub-key for functions (`Args`, `Returns`, ...)
    pub grouping: Option<String>,
    pub body: String,
}

impl RawEntity {
    pub fn new(category: EntityCategory, name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            operation: None,
            grouping: None,
            body: body.into(),
        }
    }

    pub fn with_operation(mut self, operation: OperationKind) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn with_grouping(mut self, grouping: impl Into<String>) -> Self {
        self.grouping = Some(grouping.into());
        self
    }
}

/// Entity with its output identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEntity {
    pub raw: RawEntity,
    pub formatted_name: String,
}

impl FormattedEntity {
    pub fn new(raw: RawEntity, formatted_name: impl Into<String>) -> Self {
        Self {
            raw,
            formatted_name: formatted_name.into(),
        }
    }

    pub fn category(&self) -> EntityCategory {
        self.raw.category
    }

    pub fn body(&self) -> &str {
        &self.raw.body
    }

    /// `export type <name> = <body>;`
    pub fn declaration(&self) -> String {
        format!("export type {} = {};", self.formatted_name, self.raw.body)
    }
}
