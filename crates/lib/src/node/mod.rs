//! Document tree types.
//!
//! A document is a tree of [`Node`]s. Leaves are JSON scalars; branches are
//! objects ([`Map`]) and arrays. Branches are reference counted so that a
//! document derived by [`mutate`](crate::mutate) shares every untouched
//! subtree with the document it was derived from.
//!
//! ```
//! use jsonprop::Node;
//!
//! let doc: Node = serde_json::from_str(r#"{"name": "demo", "tags": ["a", "b"]}"#)?;
//! assert!(doc.is_object());
//! assert_eq!(doc.to_json_string(), r#"{"name":"demo","tags":["a","b"]}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::{fmt, sync::Arc};

pub use serde_json::Number;

mod encoding;
pub mod map;

pub use map::Map;

/// A node in a JSON-like document.
///
/// # Variants
///
/// ## Scalars
/// - [`Node::Null`]
/// - [`Node::Bool`]
/// - [`Node::Number`] - integer or finite floating point
/// - [`Node::Text`]
///
/// ## Containers
/// - [`Node::Object`] - ordered string-keyed map
/// - [`Node::Array`] - ordered sequence
///
/// Containers sit behind an [`Arc`]; cloning a `Node` never deep-copies.
/// Use [`Arc::make_mut`] to obtain a private copy before changing one.
///
/// `Node` compares directly against primitives:
///
/// ```
/// # use jsonprop::Node;
/// assert!(Node::from("hello") == "hello");
/// assert!(Node::from(42) == 42);
/// assert!(Node::from(false) == false);
/// assert!(!(Node::from("42") == 42));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// JSON `null`
    #[default]
    Null,
    /// JSON `true`/`false`
    Bool(bool),
    /// JSON number
    Number(Number),
    /// JSON string
    Text(String),
    /// JSON object
    Object(Arc<Map>),
    /// JSON array
    Array(Arc<Vec<Node>>),
}

impl Node {
    /// Creates an empty object node.
    pub fn empty_object() -> Self {
        Node::Object(Arc::new(Map::new()))
    }

    /// Creates an empty array node.
    pub fn empty_array() -> Self {
        Node::Array(Arc::new(Vec::new()))
    }

    /// Returns true for objects and arrays
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Object(_) | Node::Array(_))
    }

    /// Returns true for null, booleans, numbers and strings
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Returns the JSON type name, used in logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::Text(_) => "string",
            Node::Object(_) => "object",
            Node::Array(_) => "array",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Node::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Returns the value as `f64` if it is any number.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Node::Object(map) => Some(map.as_ref()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns `true` if both nodes are the same allocation, or equal scalars.
    ///
    /// Used to observe structural sharing between an original document and
    /// one derived from it.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Object(a), Node::Object(b)) => Arc::ptr_eq(a, b),
            (Node::Array(a), Node::Array(b)) => Arc::ptr_eq(a, b),
            (a, b) if a.is_scalar() && b.is_scalar() => a == b,
            _ => false,
        }
    }

    /// Encodes the node as compact JSON text.
    ///
    /// ```
    /// # use jsonprop::Node;
    /// assert_eq!(Node::from("say \"hi\"").to_json_string(), r#""say \"hi\"""#);
    /// assert_eq!(Node::Null.to_json_string(), "null");
    /// ```
    pub fn to_json_string(&self) -> String {
        // Keys are strings and numbers are finite, so encoding cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// The canonical string form of a node.
///
/// Strings are written verbatim (unquoted), other scalars as their JSON
/// literal, and containers as compact JSON.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(s) => f.write_str(s),
            other => f.write_str(&other.to_json_string()),
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(value.into())
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Number(value.into())
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::Number(value.into())
    }
}

impl From<usize> for Node {
    fn from(value: usize) -> Self {
        Node::Number(value.into())
    }
}

/// Non-finite floats have no JSON representation and become `null`.
impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Node::Null, Node::Number)
    }
}

impl From<Number> for Node {
    fn from(value: Number) -> Self {
        Node::Number(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<Map> for Node {
    fn from(value: Map) -> Self {
        Node::Object(Arc::new(value))
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(Arc::new(value))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<String> for Node {
    fn eq(&self, other: &String) -> bool {
        self.as_text() == Some(other.as_str())
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<i32> for Node {
    fn eq(&self, other: &i32) -> bool {
        self.as_i64() == Some(i64::from(*other))
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
