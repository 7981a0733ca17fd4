use jsonprop::{Selection, action::run, config::Mode};

use super::helpers::Workspace;

const PACKAGE: &str = r#"{
  "name": "demo",
  "version": "1.2.3",
  "private": false,
  "scripts": {
    "build": "tsc"
  }
}"#;

fn read(workspace: &Workspace, property: &str, selection: Selection) -> String {
    let config = workspace.config(property).with_selection(selection);
    let outcome = run(&config).unwrap();
    assert_eq!(outcome.mode, Mode::Read);
    assert!(outcome.written.is_none());
    outcome.output.expect("reads report an output").value
}

#[test]
fn reads_version() {
    let workspace = Workspace::with_package(PACKAGE);
    assert_eq!(read(&workspace, "version", Selection::default()), "1.2.3");
}

#[test]
fn reads_nested_object_as_json() {
    let workspace = Workspace::with_package(PACKAGE);
    assert_eq!(
        read(&workspace, "scripts", Selection::default()),
        r#"{"build":"tsc"}"#
    );
    assert_eq!(read(&workspace, "scripts.build", Selection::default()), "tsc");
}

#[test]
fn missing_property_uses_fallback() {
    let workspace = Workspace::with_package(PACKAGE);
    let selection = Selection::default().with_fallback("none");
    assert_eq!(read(&workspace, "missing.prop", selection), "none");
}

#[test]
fn missing_property_without_fallback_is_empty() {
    let workspace = Workspace::with_package(PACKAGE);
    assert_eq!(read(&workspace, "missing", Selection::default()), "");
}

#[test]
fn falsy_value_beats_fallback() {
    let workspace = Workspace::with_package(PACKAGE);
    let selection = Selection::default().with_fallback("true");
    assert_eq!(read(&workspace, "private", selection), "false");
}

#[test]
fn override_replaces_value() {
    let workspace = Workspace::with_package(PACKAGE);
    let selection = Selection::default().with_override("0.0.0-dev");
    assert_eq!(read(&workspace, "version", selection), "0.0.0-dev");
}

#[test]
fn empty_object_falls_back() {
    let workspace = Workspace::with_package("{}");
    let selection = Selection::default().with_fallback("unset");
    assert_eq!(read(&workspace, "version", selection), "unset");
}

#[test]
fn custom_file_and_output_name() {
    let workspace = Workspace::new();
    workspace.write("manifest.json", r#"{"app":{"id":"com.example"}}"#);

    let config = workspace
        .config("app.id")
        .with_file("manifest.json")
        .with_output_name("app_id");
    let outcome = run(&config).unwrap();

    let output = outcome.output.unwrap();
    assert_eq!(output.name, "app_id");
    assert_eq!(output.value, "com.example");
}

#[test]
fn reading_leaves_file_untouched() {
    let workspace = Workspace::with_package(PACKAGE);
    read(&workspace, "version", Selection::default());
    assert_eq!(workspace.read("package.json"), PACKAGE);
}

#[test]
fn invalid_json_is_recovered_as_empty_object() {
    let workspace = Workspace::with_package("{ not json");
    let config = workspace
        .config("version")
        .with_selection(Selection::default().with_fallback("none"));

    let outcome = run(&config).unwrap();

    assert!(!outcome.is_success());
    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures[0].is_recoverable());
    assert_eq!(outcome.failures[0].path(), workspace.file("package.json"));
    assert_eq!(outcome.output.unwrap().value, "none");
}

#[test]
fn missing_file_is_recovered_as_empty_object() {
    let workspace = Workspace::new();
    let outcome = run(&workspace.config("version")).unwrap();

    assert!(!outcome.is_success());
    assert_eq!(outcome.document.to_json_string(), "{}");
    assert_eq!(outcome.output.unwrap().value, "");
}

#[test]
fn scalar_root_is_rejected() {
    let workspace = Workspace::with_package("\"1.2.3\"");
    let outcome = run(&workspace.config("version")).unwrap();
    assert!(!outcome.is_success());
}
