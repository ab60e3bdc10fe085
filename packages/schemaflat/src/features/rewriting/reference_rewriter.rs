//! Reference Rewriter
//!
//! Replaces every qualified enum/composite path with the target's formatted
//! name, across all bodies. Runs after the whole tree has been walked so
//! every target is known.

use tracing::debug;

use crate::features::extraction::ReferenceTable;
use crate::shared::models::FormattedEntity;

/// Global literal-path substitution
pub struct ReferenceRewriter<'t> {
    table: &'t ReferenceTable,
}

impl<'t> ReferenceRewriter<'t> {
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self { table }
    }

    /// Rewrite one body; returns the new text and the number of substitutions
    ///
    /// Keys end in `"]` / `']`, so no path is a prefix of another and the
    /// substitution order does not matter.
    pub fn rewrite_text(&self, text: &str) -> (String, usize) {
        let mut out = text.to_string();
        let mut replaced = 0;

        for (key, formatted) in self.table.iter() {
            for spelling in key.spellings() {
                let hits = out.matches(spelling.as_str()).count();
                if hits > 0 {
                    out = out.replace(spelling.as_str(), formatted);
                    replaced += hits;
                }
            }
        }
        (out, replaced)
    }

    /// Rewrite all entity bodies in place; returns total substitutions
    pub fn rewrite_all(&self, entities: &mut [FormattedEntity]) -> usize {
        if self.table.is_empty() {
            return 0;
        }

        let mut total = 0;
        for entity in entities.iter_mut() {
            let (body, replaced) = self.rewrite_text(&entity.raw.body);
            if replaced > 0 {
                debug!(entity = %entity.formatted_name, replaced, "rewrote references");
                entity.raw.body = body;
                total += replaced;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extraction::ReferenceKey;
    use crate::shared::models::{EntityCategory, OperationKind, RawEntity};

    fn table() -> ReferenceTable {
        let mut table = ReferenceTable::new();
        table.insert(ReferenceKey::new("public", EntityCategory::Enum, "mood"), "Mood");
        table.insert(ReferenceKey::new("public", EntityCategory::Enum, "mood_v2"), "MoodV2");
        table.insert(ReferenceKey::new("public", EntityCategory::CompositeType, "point"), "Point");
        table
    }

    #[test]
    fn test_both_quoting_styles() {
        let table = table();
        let rewriter = ReferenceRewriter::new(&table);
        let body = r#"{ a: Database["public"]["Enums"]["mood"]; b: Database['public']['Enums']['mood'] | null; c: Database["public"]["CompositeTypes"]["point"][] }"#;

        let (out, replaced) = rewriter.rewrite_text(body);
        assert_eq!(out, "{ a: Mood; b: Mood | null; c: Point[] }");
        assert_eq!(replaced, 3);
    }

    #[test]
    fn test_similar_names_do_not_collide() {
        let table = table();
        let rewriter = ReferenceRewriter::new(&table);
        let (out, _) = rewriter.rewrite_text(r#"Database["public"]["Enums"]["mood_v2"] | Database["public"]["Enums"]["mood"]"#);
        assert_eq!(out, "MoodV2 | Mood");
    }

    #[test]
    fn test_other_schema_and_tables_untouched() {
        let table = table();
        let rewriter = ReferenceRewriter::new(&table);
        let body = r#"Database["other"]["Enums"]["mood"] | Database["public"]["Tables"]["users"]["Row"]"#;
        let (out, replaced) = rewriter.rewrite_text(body);
        assert_eq!(out, body);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn test_rewrite_all_spans_every_entity() {
        let table = table();
        let rewriter = ReferenceRewriter::new(&table);
        let mut entities = vec![
            FormattedEntity::new(
                RawEntity::new(EntityCategory::Table, "users", r#"{ mood: Database["public"]["Enums"]["mood"] }"#)
                    .with_operation(OperationKind::Row),
                "usersRow",
            ),
            FormattedEntity::new(
                RawEntity::new(EntityCategory::Function, "f", r#"Database['public']['CompositeTypes']['point']"#)
                    .with_grouping("Returns"),
                "fReturns",
            ),
            FormattedEntity::new(RawEntity::new(EntityCategory::Enum, "mood", r#""a" | "b""#), "Mood"),
        ];

        assert_eq!(rewriter.rewrite_all(&mut entities), 2);
        assert_eq!(entities[0].body(), "{ mood: Mood }");
        assert_eq!(entities[1].body(), "Point");
        assert_eq!(entities[2].body(), r#""a" | "b""#);
    }
}
