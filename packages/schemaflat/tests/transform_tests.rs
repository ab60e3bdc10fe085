//! End-to-end transform tests over `.ts` fixtures

mod common;

use common::*;
use pretty_assertions::assert_eq;
use schemaflat::{transform, transform_with_report, ErrorKind, TransformConfig};

#[test]
fn test_mood_scenario_with_updates() {
    let source = load_fixture("mood.ts");
    let out = transform(&source, TransformConfig::new().schema("public").updates(true)).unwrap();

    assert_eq!(
        out,
        "export type usersRow = { id: number; mood: mood };\n\n\
         export type usersUpdate = { id?: number; mood?: mood };\n\n\
         export type mood = \"happy\" | \"sad\";\n"
    );
}

#[test]
fn test_mood_scenario_uppercase_enums() {
    let source = load_fixture("mood.ts");
    let config = TransformConfig::new().updates(true).enum_formatter(|name| name.to_uppercase());
    let out = transform(&source, config).unwrap();

    assert_eq!(
        out,
        "export type usersRow = { id: number; mood: MOOD };\n\n\
         export type usersUpdate = { id?: number; mood?: MOOD };\n\n\
         export type MOOD = \"happy\" | \"sad\";\n"
    );
}

#[test]
fn test_supabase_defaults() {
    let source = load_fixture("supabase.ts");
    let out = transform(&source, TransformConfig::new()).unwrap();

    assert_eq!(
        declared_names(&out),
        vec![
            "Json",
            "profilesRow",
            "active_profilesRow",
            "user_status",
            "visibility",
            "geo_point",
            "search_profilesReturns",
            "nearestReturns",
        ]
    );
    assert_no_qualified_paths(&out);
    assert_well_terminated(&out);

    assert_eq!(declaration_body(&out, "search_profilesReturns"), Some("user_status"));
    assert_eq!(declaration_body(&out, "nearestReturns"), Some("geo_point"));
    assert_eq!(declaration_body(&out, "visibility"), Some("\"public\""));

    let profiles = declaration_body(&out, "profilesRow").unwrap();
    assert!(profiles.contains("status: user_status"), "{profiles}");
    assert!(profiles.contains("location: geo_point | null"), "{profiles}");
}

#[test]
fn test_supabase_json_is_verbatim_and_first() {
    let source = load_fixture("supabase.ts");
    let out = transform(&source, TransformConfig::new()).unwrap();

    let json = "export type Json =\n  | string\n  | number\n  | boolean\n  | null\n  \
                | { [key: string]: Json | undefined }\n  | Json[]\n\n";
    assert!(out.starts_with(json), "{out}");
}

#[test]
fn test_supabase_all_operations() {
    let source = load_fixture("supabase.ts");
    let transformed = transform_with_report(
        &source,
        TransformConfig::new().relationships(true).inserts(true).updates(true).deletes(true),
    )
    .unwrap();

    assert_eq!(
        declared_names(&transformed.output)[..8],
        [
            "Json",
            "profilesRow",
            "profilesInsert",
            "profilesUpdate",
            "profilesRelationships",
            "postsRelationships",
            "active_profilesRow",
            "active_profilesRelationships",
        ]
    );
    assert_eq!(declaration_body(&transformed.output, "profilesRelationships"), Some("[]"));

    let report = transformed.report;
    assert_eq!(report.dropped, 3);
    assert_eq!(report.emitted.tables, 5);
    assert_eq!(report.emitted.views, 2);
    assert_eq!(report.emitted.enums, 2);
    assert_eq!(report.emitted.composite_types, 1);
    assert_eq!(report.emitted.functions, 2);
}

#[test]
fn test_numeric_records_never_emitted() {
    let source = load_fixture("supabase.ts");
    let config = TransformConfig::new()
        .inserts(true)
        .updates(true)
        .table_formatter(|name, op| format!("{}_{}", name, op.to_lowercase()));
    let out = transform(&source, config).unwrap();

    assert!(!out.contains("Record<number"), "{out}");
    assert!(!declared_names(&out).iter().any(|n| n.starts_with("posts_")));
    assert!(declared_names(&out).contains(&"profiles_insert".to_string()));
}

#[test]
fn test_references_rewritten_count() {
    let source = load_fixture("supabase.ts");
    let report = transform_with_report(&source, TransformConfig::new()).unwrap().report;

    // profilesRow (2), active_profilesRow (1), one per function Returns (2)
    assert_eq!(report.references_rewritten, 5);
    assert!(report.json_emitted);
}

#[test]
fn test_renamed_composite_propagates() {
    let source = load_fixture("supabase.ts");
    let config = TransformConfig::new()
        .composite_formatter(|name| format!("{}Type", name))
        .function_formatter(|name, group| format!("{}__{}", name, group));
    let out = transform(&source, config).unwrap();

    assert!(declared_names(&out).contains(&"geo_pointType".to_string()));
    assert_eq!(declaration_body(&out, "nearest__Returns"), Some("geo_pointType"));
    let profiles = declaration_body(&out, "profilesRow").unwrap();
    assert!(profiles.contains("location: geo_pointType | null"), "{profiles}");
}

#[test]
fn test_function_groupings_must_name_a_type() {
    let source = load_fixture("functions.ts");
    let transformed = transform_with_report(&source, TransformConfig::new()).unwrap();
    let out = &transformed.output;

    assert_eq!(
        declared_names(out),
        vec![
            "Json",
            "role",
            "account",
            "count_usersArgs",
            "current_roleReturns",
            "settingsReturns",
            "owner_ofReturns",
        ]
    );
    assert_eq!(declaration_body(out, "count_usersArgs"), Some("Record<PropertyKey, never>"));
    assert_eq!(declaration_body(out, "current_roleReturns"), Some("role"));
    assert_eq!(declaration_body(out, "owner_ofReturns"), Some("account"));
    assert_eq!(transformed.report.emitted.functions, 4);
    assert_no_qualified_paths(out);
}

#[test]
fn test_deeply_nested_source_is_a_parse_error() {
    let levels = 4000;
    let source = format!(
        "export type Database = {{ public: {{ CompositeTypes: {{ deep: {}number{} }} }} }}\n",
        "{ a: ".repeat(levels),
        " }".repeat(levels)
    );
    let err = transform(&source, TransformConfig::new()).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Parse);
    assert!(err.message.contains("nesting"), "{err}");
}

#[test]
fn test_other_schema_selected() {
    let source = load_fixture("supabase.ts");
    let out = transform(&source, TransformConfig::new().schema("graphql_public")).unwrap();

    assert_eq!(declared_names(&out), vec!["Json", "graphqlReturns"]);
    assert_eq!(declaration_body(&out, "graphqlReturns"), Some("Json"));
}

#[test]
fn test_interface_form() {
    let source = load_fixture("interface.ts");
    let out = transform(&source, TransformConfig::new().deletes(true)).unwrap();

    assert_eq!(declared_names(&out), vec!["Json", "todosRow", "todosDelete", "priority"]);
    assert_eq!(declaration_body(&out, "priority"), Some("'low' | 'high'"));
    let row = declaration_body(&out, "todosRow").unwrap();
    assert!(row.contains("priority: priority"), "{row}");
    assert_no_qualified_paths(&out);
}

#[test]
fn test_missing_schema_is_empty() {
    let source = load_fixture("supabase.ts");
    let transformed = transform_with_report(&source, TransformConfig::new().schema("storage")).unwrap();

    assert_eq!(transformed.output, "");
    assert!(transformed.report.database_found);
    assert!(!transformed.report.schema_found);
}

#[test]
fn test_missing_database_is_empty() {
    let source = "export type Json = string | number\n\nexport type Other = { public: {} }\n";
    let transformed = transform_with_report(source, TransformConfig::new()).unwrap();

    assert_eq!(transformed.output, "");
    assert!(!transformed.report.database_found);
}

#[test]
fn test_database_not_structural_is_empty() {
    let out = transform("export type Database = string\n", TransformConfig::new()).unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_parse_error_surfaces() {
    let source = load_fixture("broken.ts");
    let err = transform(&source, TransformConfig::new()).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Parse);
    assert!(err.line.is_some());
}

#[test]
fn test_invalid_schema_name_rejected_before_parse() {
    let source = load_fixture("broken.ts");
    for schema in ["", " public", "pub\"lic", "a]b"] {
        let err = transform(&source, TransformConfig::new().schema(schema)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation, "schema {schema:?}");
    }
}

#[test]
fn test_empty_formatter_output_rejected() {
    let source = load_fixture("mood.ts");
    let err = transform(&source, TransformConfig::new().enum_formatter(|_| String::new())).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_repeated_calls_identical() {
    let source = load_fixture("supabase.ts");
    let config = || TransformConfig::new().inserts(true).relationships(true);

    let first = transform(&source, config()).unwrap();
    let second = transform(&source, config()).unwrap();
    assert_eq!(first, second);
}
