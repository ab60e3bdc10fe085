//! Test fixtures
//!
//! `.ts` files under `tests/fixtures/` plus generators for property tests.

use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

/// Generated `Database` type with every table holding all five operations
///
/// Each table row references the first enum, if any, by qualified path.
pub fn fixture_schema(schema: &str, tables: &[String], enums: &[(String, Vec<String>)]) -> String {
    let reference = enums
        .first()
        .map(|(name, _)| format!("Database[\"{schema}\"][\"Enums\"][\"{name}\"]"))
        .unwrap_or_else(|| "string".to_string());

    let tables: String = tables
        .iter()
        .map(|table| {
            format!(
                "      {table}: {{\n\
                 \x20       Row: {{ id: number; kind: {reference} }}\n\
                 \x20       Insert: {{ id?: number; kind: {reference} }}\n\
                 \x20       Update: {{ id?: number; kind?: {reference} }}\n\
                 \x20       Delete: {{ id: number }}\n\
                 \x20       Relationships: []\n\
                 \x20     }}\n"
            )
        })
        .collect();

    let enums: String = enums
        .iter()
        .map(|(name, values)| {
            let union = values
                .iter()
                .map(|v| format!("\"{v}\""))
                .collect::<Vec<_>>()
                .join(" | ");
            format!("      {name}: {union}\n")
        })
        .collect();

    format!(
        "export type Database = {{\n\
         \x20 {schema}: {{\n\
         \x20   Tables: {{\n{tables}    }}\n\
         \x20   Enums: {{\n{enums}    }}\n\
         \x20 }}\n\
         }}\n"
    )
}
