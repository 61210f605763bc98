// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::{Value, json};

use super::{Descriptor, EnvConfigImporter, ImportOptions, SkipReason, import};
use crate::env::Env;
use crate::error::ImportError;
use crate::tree::Tree;

const BAZINGA: &str = r#"{"path":"some.config.stuff","value":"Bazinga!"}"#;

fn env(vars: &[(&str, &str)]) -> Env {
    vars.iter().copied().collect()
}

fn tree(value: Value) -> Tree {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_missing_prefix_leaves_tree_untouched() {
    let mut target = tree(json!({ "keep": 1 }));
    let env = env(&[("FOO_VAR_1", BAZINGA)]);

    let err = import("", &env, &mut target).unwrap_err();
    assert!(matches!(err, ImportError::MissingPrefix));
    assert_eq!(Value::Object(target), json!({ "keep": 1 }));
}

#[test]
fn test_missing_prefix_from_options() {
    let err = EnvConfigImporter::from_options(&ImportOptions::default()).unwrap_err();
    assert!(matches!(err, ImportError::MissingPrefix));

    let options = ImportOptions::builder().prefix("").build();
    let err = EnvConfigImporter::from_options(&options).unwrap_err();
    assert!(matches!(err, ImportError::MissingPrefix));
}

#[test]
fn test_adds_new_value() {
    let mut target = Tree::new();
    let env = env(&[("FOO_VAR_test1", BAZINGA)]);

    let report = import("FOO_VAR_", &env, &mut target).unwrap();

    assert_eq!(
        Value::Object(target),
        json!({ "some": { "config": { "stuff": "Bazinga!" } } })
    );
    assert_eq!(report.applied().len(), 1);
    assert_eq!(report.applied()[0].variable, "FOO_VAR_test1");
    assert_eq!(report.applied()[0].path.as_str(), "some.config.stuff");
}

#[test]
fn test_adds_only_matching_prefix() {
    let mut target = Tree::new();
    let env = env(&[("FOO_VAR_test1", BAZINGA), ("SOME_VAR_test", "nothingness")]);

    let report = import("FOO_VAR_", &env, &mut target).unwrap();

    assert_eq!(
        Value::Object(target),
        json!({ "some": { "config": { "stuff": "Bazinga!" } } })
    );
    assert_eq!(report.selected(), 1);
}

#[test]
fn test_unparsable_value_keeps_earlier_assignments() {
    let mut target = Tree::new();
    let env = env(&[
        ("FOO_VAR_test1", BAZINGA),
        ("FOO_VAR_test2", "not a stringified object"),
        ("FOO_VAR_test3", r#"{"path":"later","value":1}"#),
    ]);

    let err = import("FOO_VAR_", &env, &mut target).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"value unparsable: not a stringified object");
    assert_eq!(err.raw_value(), Some("not a stringified object"));
    assert_eq!(err.variable(), Some("FOO_VAR_test2"));
    assert_eq!(
        Value::Object(target),
        json!({ "some": { "config": { "stuff": "Bazinga!" } } }),
        "test1 stays applied, test3 is never reached"
    );
}

#[test]
fn test_atomic_mode_rolls_back_on_failure() {
    let mut target = tree(json!({ "existing": true }));
    let env = env(&[
        ("FOO_VAR_test1", BAZINGA),
        ("FOO_VAR_test2", "not a stringified object"),
    ]);

    let importer = EnvConfigImporter::new("FOO_VAR_").unwrap().with_atomic(true);
    let err = importer.import(&env, &mut target).unwrap_err();

    assert!(matches!(err, ImportError::UnparsableValue { .. }));
    assert_eq!(Value::Object(target), json!({ "existing": true }));
}

#[test]
fn test_atomic_mode_applies_on_success() {
    let mut target = tree(json!({ "existing": true }));
    let env = env(&[("FOO_VAR_test1", BAZINGA)]);

    let options = ImportOptions::builder()
        .prefix("FOO_VAR_")
        .atomic(true)
        .build();
    let importer = EnvConfigImporter::from_options(&options).unwrap();
    assert!(importer.is_atomic());
    importer.import(&env, &mut target).unwrap();

    assert_eq!(
        Value::Object(target),
        json!({ "existing": true, "some": { "config": { "stuff": "Bazinga!" } } })
    );
}

#[test]
fn test_ignores_missing_value_key() {
    let mut target = Tree::new();
    let env = env(&[
        ("FOO_VAR_test1", BAZINGA),
        ("FOO_VAR_test2", r#"{"path":"some","key": "test"}"#),
    ]);

    let report = import("FOO_VAR_", &env, &mut target).unwrap();

    assert_eq!(
        Value::Object(target),
        json!({ "some": { "config": { "stuff": "Bazinga!" } } })
    );
    assert_eq!(report.skipped()[0].reason, SkipReason::MissingValue);
}

#[test]
fn test_ignores_missing_path_key() {
    let mut target = Tree::new();
    let env = env(&[
        ("FOO_VAR_test1", BAZINGA),
        ("FOO_VAR_test2", r#"{"value":"some","key": "test"}"#),
    ]);

    let report = import("FOO_VAR_", &env, &mut target).unwrap();

    assert_eq!(
        Value::Object(target),
        json!({ "some": { "config": { "stuff": "Bazinga!" } } })
    );
    assert_eq!(report.skipped()[0].reason, SkipReason::MissingPath);
}

#[test]
fn test_skip_reasons() {
    let mut target = Tree::new();
    let env = env(&[
        ("P_1", "42"),
        ("P_2", "null"),
        ("P_3", r#"["path","value"]"#),
        ("P_4", r#"{"path":"","value":1}"#),
        ("P_5", r#"{"path":7,"value":1}"#),
        ("P_6", r#"{"path":"a"}"#),
    ]);

    let report = import("P_", &env, &mut target).unwrap();

    assert!(target.is_empty());
    let reasons: Vec<_> = report
        .skipped()
        .iter()
        .map(|s| format!("{}: {}", s.variable, s.reason))
        .collect();
    insta::assert_debug_snapshot!(reasons, @r#"
    [
        "P_1: not an object",
        "P_2: not an object",
        "P_3: not an object",
        "P_4: missing path",
        "P_5: missing path",
        "P_6: missing value",
    ]
    "#);
}

#[test]
fn test_null_value_is_present() {
    let mut target = tree(json!({ "a": { "b": "old" } }));
    let env = env(&[("P_1", r#"{"path":"a.b","value":null}"#)]);

    import("P_", &env, &mut target).unwrap();

    assert_eq!(Value::Object(target), json!({ "a": { "b": null } }));
}

#[test]
fn test_reuses_existing_objects_in_path() {
    let mut target = tree(json!({ "some": {} }));
    let env = env(&[("FOO_VAR_test1", BAZINGA)]);

    import("FOO_VAR_", &env, &mut target).unwrap();

    assert_eq!(
        Value::Object(target),
        json!({ "some": { "config": { "stuff": "Bazinga!" } } })
    );
}

#[test]
fn test_overwrites_existing_value() {
    let mut target = tree(json!({
        "some": { "config": { "stuff": "Spock!", "other": 1 }, "peer": true }
    }));
    let env = env(&[("FOO_VAR_test1", BAZINGA)]);

    import("FOO_VAR_", &env, &mut target).unwrap();

    assert_eq!(
        Value::Object(target),
        json!({ "some": { "config": { "stuff": "Bazinga!", "other": 1 }, "peer": true } })
    );
}

#[test]
fn test_structural_coercion() {
    let mut target = tree(json!({ "a": "scalar" }));
    let env = env(&[("P_1", r#"{"path":"a.b","value":1}"#)]);

    import("P_", &env, &mut target).unwrap();

    assert_eq!(Value::Object(target), json!({ "a": { "b": 1 } }));
}

#[test]
fn test_later_names_win_conflicts() {
    let mut target = Tree::new();
    let env = env(&[
        ("P_B", r#"{"path":"a","value":"second"}"#),
        ("P_A", r#"{"path":"a.b","value":"first"}"#),
    ]);

    let report = import("P_", &env, &mut target).unwrap();

    assert_eq!(Value::Object(target), json!({ "a": "second" }));
    let order: Vec<_> = report.applied().iter().map(|a| a.variable.as_str()).collect();
    assert_eq!(order, ["P_A", "P_B"]);
}

#[test]
fn test_values_pass_through_unmodified() {
    let mut target = Tree::new();
    let value = json!({ "n": 1.5, "list": [1, "two", null], "flag": false });
    let raw = json!({ "path": "cfg", "value": value }).to_string();
    let env = env(&[("P_1", raw.as_str())]);

    import("P_", &env, &mut target).unwrap();

    assert_eq!(target["cfg"], value);
}

#[test]
fn test_reimport_is_idempotent() {
    let env = env(&[
        ("P_1", r#"{"path":"a.b","value":1}"#),
        ("P_2", r#"{"path":"a.c","value":[2]}"#),
    ]);
    let mut target = Tree::new();

    import("P_", &env, &mut target).unwrap();
    let first = target.clone();
    import("P_", &env, &mut target).unwrap();

    assert_eq!(first, target);
}

#[test]
fn test_descriptor_decoding() {
    let decoded = Descriptor::from_json(json!({ "path": "a.b", "value": null, "extra": 1 }))
        .unwrap();
    assert_eq!(decoded.path.as_ref().map(|p| p.as_str()), Some("a.b"));
    assert_eq!(decoded.value, Some(Value::Null));

    let decoded = Descriptor::from_json(json!({ "path": "a.b" })).unwrap();
    assert_eq!(decoded.value, None);
    assert_eq!(
        decoded.into_assignment().unwrap_err(),
        SkipReason::MissingValue
    );
}

fn nested_descriptor(depth: usize) -> String {
    format!(
        r#"{{"path":"deep","value":{}{}}}"#,
        "[".repeat(depth),
        "]".repeat(depth)
    )
}

#[test]
fn test_deeply_nested_value_within_parser_limit() {
    let mut target = Tree::new();
    let raw = nested_descriptor(100);
    let env = env(&[("FOO_VAR_deep", raw.as_str())]);

    let report = import("FOO_VAR_", &env, &mut target).unwrap();
    assert_eq!(report.applied().len(), 1);

    let mut depth = 0;
    let mut node = &target["deep"];
    while let Some([inner]) = node.as_array().map(Vec::as_slice) {
        node = inner;
        depth += 1;
    }
    assert_eq!(depth, 99);
    assert_eq!(node, &json!([]));
}

#[test]
fn test_value_nested_past_parser_limit_is_unparsable() {
    let mut target = tree(json!({ "keep": 1 }));
    let raw = nested_descriptor(200);
    let env = env(&[("FOO_VAR_deep", raw.as_str())]);

    let err = import("FOO_VAR_", &env, &mut target).unwrap_err();
    assert!(matches!(err, ImportError::UnparsableValue { .. }));
    assert_eq!(err.raw_value(), Some(raw.as_str()));
    assert_eq!(Value::Object(target), json!({ "keep": 1 }));
}

#[test]
fn test_prefix_continuations_sort_before_separator() {
    let mut target = Tree::new();
    let env = env(&[
        ("APP_1", r#"{"path":"winner","value":"underscore"}"#),
        ("APPX", r#"{"path":"winner","value":"letter"}"#),
    ]);

    let report = import("APP", &env, &mut target).unwrap();

    let order: Vec<_> = report.applied().iter().map(|a| a.variable.as_str()).collect();
    assert_eq!(order, ["APPX", "APP_1"]);
    assert_eq!(target["winner"], json!("underscore"));
}
