use jsonprop::{CastTag, Edit, Path, Selection, cast, mutate, resolve, select};

use crate::helpers::*;

#[test]
fn read_version() {
    let package = doc(r#"{"name":"demo","version":"1.2.3"}"#);
    let reported = select(resolve(&package, &Path::parse("version")), &Selection::default());
    assert_eq!(reported, "1.2.3");
}

#[test]
fn read_missing_with_fallback() {
    let package = doc(r#"{"name":"demo"}"#);
    let selection = Selection::default().with_fallback("none");
    let reported = select(resolve(&package, &Path::parse("missing.prop")), &selection);
    assert_eq!(reported, "none");
}

#[test]
fn read_override_wins() {
    let package = doc(r#"{"version":"1.2.3"}"#);
    let selection = Selection::default().with_override("9.9.9").with_fallback("none");
    assert_eq!(select(resolve(&package, &Path::parse("version")), &selection), "9.9.9");
    assert_eq!(select(resolve(&package, &Path::parse("nope")), &selection), "9.9.9");
}

#[test]
fn read_container_as_compact_json() {
    let package = doc(r#"{"scripts":{"build":"tsc","test":"jest"}}"#);
    let reported = select(resolve(&package, &Path::parse("scripts")), &Selection::default());
    assert_eq!(reported, r#"{"build":"tsc","test":"jest"}"#);
}

#[test]
fn write_number_into_empty_object() {
    let value = cast("5", CastTag::Number).unwrap();
    let updated = mutate(&doc("{}"), &Path::parse("a.b"), Edit::Set(value)).unwrap();
    assert_eq!(updated.to_json_string(), r#"{"a":{"b":5}}"#);
}

#[test]
fn write_object_value() {
    let value = cast(r#"{"node":">=18"}"#, CastTag::Object).unwrap();
    let updated = mutate(&doc(r#"{"name":"demo"}"#), &Path::parse("engines"), Edit::Set(value)).unwrap();
    assert_eq!(updated.to_json_string(), r#"{"name":"demo","engines":{"node":">=18"}}"#);
}

#[test]
fn delete_nested_key() {
    let original = doc(r#"{"a":{"b":1,"c":2}}"#);
    let updated = mutate(&original, &Path::parse("a.b"), Edit::Delete).unwrap();
    assert_eq!(updated.to_json_string(), r#"{"a":{"c":2}}"#);
}

#[test]
fn new_keys_append_after_existing_ones() {
    let original = doc(r#"{"name":"demo","version":"1.0.0"}"#);
    let updated = mutate(&original, &Path::parse("private"), Edit::Set(cast("true", CastTag::Boolean).unwrap())).unwrap();
    assert_eq!(
        updated.to_json_string(),
        r#"{"name":"demo","version":"1.0.0","private":true}"#
    );
}

#[test]
fn overwrite_keeps_key_position() {
    let original = doc(r#"{"name":"demo","version":"1.0.0","main":"index.js"}"#);
    let updated = mutate(&original, &Path::parse("version"), Edit::Set("2.0.0".into())).unwrap();
    assert_eq!(
        updated.to_json_string(),
        r#"{"name":"demo","version":"2.0.0","main":"index.js"}"#
    );
}
