//! Property-based tests for the transform
//!
//! Invariants that hold for every generated `Database` type:
//! - Determinism: identical inputs give byte-identical output
//! - Monotonicity: enabling operations never removes table declarations
//! - Soft not-found: an absent schema gives "" and no error
//! - Rewriting: no qualified enum path survives, renames stay consistent

mod common;

use common::*;
use proptest::prelude::*;
use schemaflat::{transform, transform_with_report, OperationFlags, TransformConfig};

fn table_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("t_[a-z]{1,6}", 0..5).prop_map(|s| s.into_iter().collect())
}

fn enums() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::btree_map("e_[a-z]{1,6}", prop::collection::vec("[a-z]{1,6}", 1..4), 0..4)
        .prop_map(|m| m.into_iter().collect())
}

fn flags() -> impl Strategy<Value = OperationFlags> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(relationships, inserts, updates, deletes)| {
        OperationFlags {
            relationships,
            inserts,
            updates,
            deletes,
        }
    })
}

fn enabled(flags: OperationFlags) -> usize {
    [flags.relationships, flags.inserts, flags.updates, flags.deletes]
        .iter()
        .filter(|on| **on)
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deterministic(tables in table_names(), enums in enums(), flags in flags()) {
        let source = fixture_schema("public", &tables, &enums);
        let first = transform(&source, TransformConfig::new().operations(flags)).unwrap();
        let second = transform(&source, TransformConfig::new().operations(flags)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_operations_monotonic(tables in table_names(), enums in enums(), flags in flags()) {
        let source = fixture_schema("public", &tables, &enums);

        let baseline = transform_with_report(&source, TransformConfig::new()).unwrap().report;
        let widened = transform_with_report(&source, TransformConfig::new().operations(flags))
            .unwrap()
            .report;

        prop_assert_eq!(baseline.emitted.tables, tables.len());
        prop_assert!(widened.emitted.tables >= baseline.emitted.tables);
        prop_assert_eq!(widened.emitted.tables, tables.len() * (1 + enabled(flags)));
        prop_assert_eq!(widened.emitted.enums, baseline.emitted.enums);
    }

    #[test]
    fn prop_absent_schema_is_empty(
        tables in table_names(),
        enums in enums(),
        schema in "[a-z]{1,8}",
    ) {
        prop_assume!(schema != "public");
        let source = fixture_schema("public", &tables, &enums);

        let out = transform(&source, TransformConfig::new().schema(schema)).unwrap();
        prop_assert_eq!(out, "");
    }

    #[test]
    fn prop_no_qualified_path_survives(tables in table_names(), enums in enums(), flags in flags()) {
        let source = fixture_schema("public", &tables, &enums);
        let out = transform(&source, TransformConfig::new().operations(flags)).unwrap();

        assert_no_qualified_paths(&out);
        assert_well_terminated(&out);
    }

    #[test]
    fn prop_renamed_enum_used_everywhere(tables in table_names(), enums in enums()) {
        prop_assume!(!tables.is_empty() && !enums.is_empty());
        let source = fixture_schema("public", &tables, &enums);

        let out = transform(
            &source,
            TransformConfig::new().updates(true).enum_formatter(|n| n.to_uppercase()),
        )
        .unwrap();

        let target = enums[0].0.to_uppercase();
        for table in &tables {
            let row = declaration_body(&out, &format!("{table}Row")).unwrap();
            prop_assert!(row.contains(&format!("kind: {target}")), "{}", row);
            let update = declaration_body(&out, &format!("{table}Update")).unwrap();
            prop_assert!(update.contains(&format!("kind?: {target}")), "{}", update);
        }
        prop_assert!(declared_names(&out).contains(&target));
    }
}
