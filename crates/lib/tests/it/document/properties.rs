use jsonprop::{
    CastTag, Edit, MutateError, Node, Path, Selection, cast, mutate, mutate::MAX_ARRAY_PADDING,
    resolve, select,
};

use crate::helpers::*;

const SAMPLES: &[&str] = &[
    r#"{}"#,
    r#"[]"#,
    r#"{"a":{"b":1,"c":[1,2,{"d":null}]},"e":false}"#,
    r#"[{"a":1},[2,3],"x",null]"#,
    r#"{"a":"text","b":{"c":{}}}"#,
];

const PROPERTIES: &[&str] = &["a", "a.b", "a.c.2.d", "0", "1.1", "e", "b.c.x", "3", "z.0.y"];

/// Paths whose last segment is a key or the trailing index of every sample.
const STABLE_DELETES: &[&str] = &["a", "a.b", "a.c.2.d", "1.1", "e", "b.c.x", "3", "z.0.y"];

#[test]
fn delete_is_idempotent() {
    for sample in SAMPLES {
        let original = doc(sample);
        for property in STABLE_DELETES {
            let path = Path::parse(property);
            let once = mutate(&original, &path, Edit::Delete).unwrap();
            let twice = mutate(&once, &path, Edit::Delete).unwrap();
            assert_eq!(once, twice, "deleting '{property}' from {sample}");
        }
    }
}

#[test]
fn read_after_write() {
    let value = Node::from("written");
    for sample in SAMPLES {
        let original = doc(sample);
        for property in PROPERTIES {
            let path = Path::parse(property);
            let updated = mutate(&original, &path, Edit::Set(value.clone())).unwrap();
            assert_eq!(
                resolve(&updated, &path).found(),
                Some(&value),
                "writing '{property}' into {sample}"
            );
        }
    }
}

#[test]
fn reads_and_writes_leave_input_untouched() {
    for sample in SAMPLES {
        let original = doc(sample);
        let snapshot = original.to_json_string();
        for property in PROPERTIES {
            let path = Path::parse(property);
            let _ = resolve(&original, &path);
            let _ = mutate(&original, &path, Edit::Set(Node::from(1))).unwrap();
            let _ = mutate(&original, &path, Edit::Delete).unwrap();
        }
        assert_eq!(original.to_json_string(), snapshot);
    }
}

#[test]
fn writes_vivify_missing_containers() {
    let updated = mutate(&doc("{}"), &Path::parse("a.b"), Edit::Set(Node::from("x"))).unwrap();
    assert_eq!(updated, doc(r#"{"a":{"b":"x"}}"#));

    let updated = mutate(&doc("{}"), &Path::parse("list.1"), Edit::Set(Node::from(true))).unwrap();
    assert_eq!(updated, doc(r#"{"list":[null,true]}"#));
}

#[test]
fn array_elements_set_and_delete() {
    let original = doc(r#"{"list":[1,2,3]}"#);

    let updated = mutate(&original, &Path::parse("list.1"), Edit::Set(Node::from(20))).unwrap();
    assert_found(&updated, "list", "[1,20,3]");

    let updated = mutate(&original, &Path::parse("list.0"), Edit::Delete).unwrap();
    assert_found(&updated, "list", "[2,3]");

    let updated = mutate(&original, &Path::parse("list.7"), Edit::Delete).unwrap();
    assert_eq!(updated, original);
}

#[test]
fn delete_shifts_later_elements() {
    let original = doc(r#"["a","b","c"]"#);
    let path = Path::parse("0");

    let once = mutate(&original, &path, Edit::Delete).unwrap();
    assert_eq!(once, doc(r#"["b","c"]"#));
    let twice = mutate(&once, &path, Edit::Delete).unwrap();
    assert_eq!(twice, doc(r#"["c"]"#));
}

#[test]
fn missing_is_distinct_from_null() {
    let original = doc(r#"{"a":null}"#);
    let selection = Selection::default().with_fallback("none");

    assert_found(&original, "a", "null");
    assert_missing(&original, "b");
    assert_missing(&original, "a.b");
    assert_eq!(select(resolve(&original, &Path::parse("a")), &selection), "null");
    assert_eq!(select(resolve(&original, &Path::parse("b")), &selection), "none");
}

#[test]
fn falsy_values_survive_selection() {
    let original = doc(r#"{"f":false,"z":0,"s":"","n":null}"#);
    let selection = Selection::default().with_fallback("fallback");

    for (property, expected) in [("f", "false"), ("z", "0"), ("s", ""), ("n", "null")] {
        let reported = select(resolve(&original, &Path::parse(property)), &selection);
        assert_eq!(reported, expected, "reading '{property}'");
    }
}

#[test]
fn failed_casts_produce_no_edit() {
    let original = doc(r#"{"a":1}"#);
    for (raw, tag) in [
        ("abc", CastTag::Number),
        ("", CastTag::Number),
        ("yes", CastTag::Boolean),
        ("{", CastTag::Object),
    ] {
        let result = cast(raw, tag).map(|value| mutate(&original, &Path::parse("a"), Edit::Set(value)));
        assert!(result.is_err(), "casting {raw:?} as {tag}");
    }
    assert_found(&original, "a", "1");
}

#[test]
fn unchanged_siblings_are_shared() {
    let original = doc(r#"{"keep":{"deep":[1,2,3]},"edit":{"x":1}}"#);
    let updated = mutate(&original, &Path::parse("edit.x"), Edit::Set(Node::from(2))).unwrap();

    let before = get(&original, "keep").unwrap();
    let after = get(&updated, "keep").unwrap();
    assert!(before.ptr_eq(after));
    assert!(!get(&original, "edit").unwrap().ptr_eq(get(&updated, "edit").unwrap()));
}

#[test]
fn oversized_indices_never_panic() {
    let original = doc(r#"{"list":["a"]}"#);
    for property in [
        "list.18446744073709551615",
        "list.4294967295",
        "list.4294967294",
        "list.1000000000000",
    ] {
        let path = Path::parse(property);
        match mutate(&original, &path, Edit::Set(Node::from("x"))) {
            Ok(updated) => assert_found(&updated, property, r#""x""#),
            Err(MutateError::IndexTooFar { len, .. }) => assert_eq!(len, 1),
            Err(other) => panic!("unexpected error for '{property}': {other}"),
        }
        assert_eq!(mutate(&original, &path, Edit::Delete).unwrap(), original);
    }

    let reachable = format!("list.{MAX_ARRAY_PADDING}");
    assert!(mutate(&original, &Path::parse(&reachable), Edit::Set(Node::Null)).is_ok());
}
