use jsonprop::{Node, Path, Resolution, resolve};

/// Decodes a JSON literal, panicking on malformed test input.
pub fn doc(json: &str) -> Node {
    serde_json::from_str(json).expect("test document should be valid JSON")
}

/// Resolves a dotted path, returning the node if present.
pub fn get<'a>(node: &'a Node, property: &str) -> Option<&'a Node> {
    resolve(node, &Path::parse(property)).found()
}

/// Asserts that `property` resolves to `expected`, given as JSON.
pub fn assert_found(node: &Node, property: &str, expected: &str) {
    match resolve(node, &Path::parse(property)) {
        Resolution::Found(actual) => assert_eq!(
            actual,
            &doc(expected),
            "unexpected value at '{property}' in {node}"
        ),
        Resolution::Missing => panic!("'{property}' is missing from {node}"),
    }
}

/// Asserts that `property` does not resolve.
pub fn assert_missing(node: &Node, property: &str) {
    assert!(
        resolve(node, &Path::parse(property)).is_missing(),
        "'{property}' unexpectedly resolves in {node}"
    );
}
