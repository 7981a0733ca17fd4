//! Copy-on-write updates by path.
//!
//! [`mutate`] never touches the document it is given. It clones the root
//! handle (a reference count bump for containers) and calls
//! [`Arc::make_mut`] on each container along the path, so exactly the
//! containers on the path are copied and every sibling subtree stays shared
//! with the input.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::{
    node::{Map, Node},
    path::{Path, Segment},
    resolve::resolve,
};

/// Largest number of slots, padding included, a single set may add to an array.
pub const MAX_ARRAY_PADDING: usize = 1 << 16;

/// Errors from [`mutate`].
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MutateError {
    /// Setting the index would grow the array by more than [`MAX_ARRAY_PADDING`] slots
    #[error("index {index} is too far past the end of an array of length {len}")]
    IndexTooFar { index: usize, len: usize },
}

impl From<MutateError> for crate::Error {
    fn from(err: MutateError) -> Self {
        crate::Error::Mutate(err)
    }
}

/// The change [`mutate`] applies at the end of a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Store the node at the path, creating whatever is missing on the way.
    Set(Node),
    /// Remove the key or array element at the path.
    Delete,
}

impl From<Node> for Edit {
    fn from(node: Node) -> Self {
        Edit::Set(node)
    }
}

/// Returns a copy of `doc` with `edit` applied at `path`.
///
/// # Set
///
/// Every step along the path must find a container of the kind its segment
/// addresses: an object for a key, an array for an index. A missing node, or
/// one of the wrong kind, is replaced by an empty object or array before
/// descending, so a set always succeeds and the old value at that position is
/// discarded. Setting an index past the end of an array pads the gap with
/// `null`, up to [`MAX_ARRAY_PADDING`] slots; a farther index is
/// [`MutateError::IndexTooFar`].
///
/// # Delete
///
/// A key is removed from its object; an array element is spliced out, so
/// later elements move down one index. If the path does not resolve, the
/// result is equal to `doc`.
///
/// # Root path
///
/// Setting the root path replaces the whole document; deleting it is a no-op.
///
/// ```
/// use jsonprop::{Edit, Node, Path, mutate};
///
/// let doc: Node = serde_json::from_str("{}")?;
/// let updated = mutate(&doc, &Path::parse("a.b"), Edit::Set(Node::from("x")))?;
/// assert_eq!(updated.to_json_string(), r#"{"a":{"b":"x"}}"#);
/// assert_eq!(doc.to_json_string(), "{}");
///
/// let list: Node = serde_json::from_str(r#"{"list":["a","b"]}"#)?;
/// let trimmed = mutate(&list, &Path::parse("list.1"), Edit::Delete)?;
/// assert_eq!(trimmed.to_json_string(), r#"{"list":["a"]}"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn mutate(doc: &Node, path: &Path, edit: Edit) -> Result<Node, MutateError> {
    match edit {
        Edit::Set(value) => set(doc, path, value),
        Edit::Delete => Ok(delete(doc, path)),
    }
}

fn set(doc: &Node, path: &Path, value: Node) -> Result<Node, MutateError> {
    let mut root = doc.clone();
    let mut slot = &mut root;
    for segment in path {
        slot = vivify(slot, segment)?;
    }
    *slot = value;
    Ok(root)
}

fn delete(doc: &Node, path: &Path) -> Node {
    let Some((last, parents)) = path.segments().split_last() else {
        debug!("delete of the root path ignored");
        return doc.clone();
    };

    if resolve(doc, path).is_missing() {
        debug!(%path, "delete target missing, document unchanged");
        return doc.clone();
    }

    let mut root = doc.clone();
    let mut parent = &mut root;
    for segment in parents {
        match existing_child(parent, segment) {
            Some(child) => parent = child,
            None => return root,
        }
    }

    match (parent, last) {
        (Node::Object(map), Segment::Key(key)) => {
            Arc::make_mut(map).remove(key);
        }
        (Node::Array(items), Segment::Index(index)) => {
            Arc::make_mut(items).remove(*index);
        }
        _ => {}
    }
    root
}

/// Returns the child slot addressed by `segment`, first turning `node` into a
/// container of the right kind and creating the slot if needed.
fn vivify<'n>(node: &'n mut Node, segment: &Segment) -> Result<&'n mut Node, MutateError> {
    let index = match segment {
        Segment::Key(key) => return Ok(object_mut(node).get_or_insert_with(key, || Node::Null)),
        Segment::Index(index) => *index,
    };
    let items = array_mut(node);
    let len = items.len();
    if index >= len {
        let too_far = MutateError::IndexTooFar { index, len };
        if index - len >= MAX_ARRAY_PADDING {
            return Err(too_far);
        }
        let new_len = index.checked_add(1).ok_or(too_far)?;
        items.resize(new_len, Node::Null);
    }
    Ok(&mut items[index])
}

fn object_mut(node: &mut Node) -> &mut Map {
    if !node.is_object() {
        if !node.is_null() {
            debug!(replaced = node.type_name(), "overwriting node with an object");
        }
        *node = Node::empty_object();
    }
    match node {
        Node::Object(map) => Arc::make_mut(map),
        _ => unreachable!("node was just replaced by an object"),
    }
}

fn array_mut(node: &mut Node) -> &mut Vec<Node> {
    if !node.is_array() {
        if !node.is_null() {
            debug!(replaced = node.type_name(), "overwriting node with an array");
        }
        *node = Node::empty_array();
    }
    match node {
        Node::Array(items) => Arc::make_mut(items),
        _ => unreachable!("node was just replaced by an array"),
    }
}

/// Like [`resolve::child`](crate::resolve) but yields a private, writable copy.
fn existing_child<'n>(node: &'n mut Node, segment: &Segment) -> Option<&'n mut Node> {
    match (node, segment) {
        (Node::Object(map), Segment::Key(key)) => Arc::make_mut(map).get_mut(key),
        (Node::Array(items), Segment::Index(index)) => Arc::make_mut(items).get_mut(*index),
        _ => None,
    }
}
