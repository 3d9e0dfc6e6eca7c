//! End-to-end tests for `panelforge validate`.

use serde_json::Value;

mod fixtures;
use fixtures::*;

#[test]
fn test_validate_clean_bundle() {
    let bundle = filter_bundle();
    let output = run_panelforge(&["validate", bundle.arg()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Validation should pass. stdout: {}",
        stdout(&output)
    );
    assert!(stdout(&output).contains("✓ Validation passed (4 components)"));
}

#[test]
fn test_validate_duplicate_identifiers() {
    let bundle = bundle(
        "Dup",
        vec![
            oval("freq_param", HUE_PARAM, 10.0, 10.0),
            oval("FREQ_Param", HUE_PARAM, 10.0, 50.0),
        ],
    );
    let output = run_panelforge(&["validate", bundle.arg()]);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("✗ Validation failed"));
    assert!(text.contains("1 validation errors"));
    assert!(text.contains("FREQ_PARAM is already used by component #0"));
}

#[test]
fn test_validate_warnings_pass_unless_strict() {
    let bundle = bundle(
        "Warn",
        vec![
            oval("gain_param", HUE_PARAM, 10.0, 10.0),
            oval("clip", HUE_LIGHT, 10.0, 30.0),
            oval("stray", HUE_UNKNOWN, 10.0, 50.0),
        ],
    );

    let output = run_panelforge(&["validate", bundle.arg()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("2 warnings"));

    let output = run_panelforge(&["validate", bundle.arg(), "--strict"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Warnings found in strict mode"));
}

#[test]
fn test_validate_json() {
    let bundle = bundle(
        "Json",
        vec![
            element("wobbly_output", "(Oval)", HUE_OUTPUT, &[[0.0, 0.0]; 3]),
            oval("_param", HUE_PARAM, 10.0, 10.0),
        ],
    );
    let output = run_panelforge(&["validate", bundle.arg(), "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let response: Value = serde_json::from_str(&stdout(&output)).expect("Invalid JSON");
    assert_eq!(response["valid"], false);
    assert_eq!(response["components"], 2);

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["kind"], "empty_identifier");
    assert_eq!(errors[0]["component"], "_param");
    assert_eq!(errors[0]["index"], 1);

    let warnings = response["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["kind"], "missing_coordinates");
}

#[test]
fn test_validate_missing_layer() {
    let bundle = bundle_with_artboards(
        "Bare",
        &[serde_json::json!({ "layers": [] })],
    );
    let output = run_panelforge(&["validate", bundle.arg()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'components' layer"));
}
