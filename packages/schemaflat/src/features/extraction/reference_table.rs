//! Reference table
//!
//! Maps a qualified path into the `Database` type to the formatted name of
//! the enum or composite type it points at. Built during extraction,
//! consumed once by the rewriter.

use std::collections::BTreeMap;

use crate::shared::models::EntityCategory;

/// `(schema, category, name)` of a referenceable entity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceKey {
    pub schema: String,
    pub category: EntityCategory,
    pub name: String,
}

impl ReferenceKey {
    pub fn new(schema: impl Into<String>, category: EntityCategory, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            category,
            name: name.into(),
        }
    }

    /// `Database["public"]["Enums"]["mood"]`
    pub fn double_quoted(&self) -> String {
        format!(
            "Database[\"{}\"][\"{}\"][\"{}\"]",
            self.schema,
            self.category.group_key(),
            self.name
        )
    }

    /// `Database['public']['Enums']['mood']`
    pub fn single_quoted(&self) -> String {
        format!(
            "Database['{}']['{}']['{}']",
            self.schema,
            self.category.group_key(),
            self.name
        )
    }

    /// Both spellings of the qualified path
    pub fn spellings(&self) -> [String; 2] {
        [self.double_quoted(), self.single_quoted()]
    }
}

/// Qualified path → formatted name
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: BTreeMap<ReferenceKey, String>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a target; a later entry with the same key wins
    pub fn insert(&mut self, key: ReferenceKey, formatted_name: impl Into<String>) {
        self.entries.insert(key, formatted_name.into());
    }

    pub fn get(&self, key: &ReferenceKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ReferenceKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
