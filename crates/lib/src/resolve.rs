//! Read access by path.

use crate::{
    node::Node,
    path::{Path, Segment},
};

/// Outcome of [`resolve`].
///
/// `Missing` means nothing exists at the path. It is distinct from
/// `Found(&Node::Null)`, which means the path exists and holds `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a Node),
    Missing,
}

impl<'a> Resolution<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolution::Missing)
    }

    /// Converts into an `Option`, `None` when missing.
    pub fn found(self) -> Option<&'a Node> {
        match self {
            Resolution::Found(node) => Some(node),
            Resolution::Missing => None,
        }
    }
}

impl<'a> From<Option<&'a Node>> for Resolution<'a> {
    fn from(node: Option<&'a Node>) -> Self {
        node.map_or(Resolution::Missing, Resolution::Found)
    }
}

/// Looks up the node at `path`.
///
/// Never fails and never modifies `doc`. A key segment only descends into an
/// object and an index segment only into an array; any other combination,
/// an absent key, or an out-of-range index resolves to
/// [`Resolution::Missing`]. The root path resolves to `doc` itself.
///
/// ```
/// use jsonprop::{Node, Path, Resolution, resolve};
///
/// let doc: Node = serde_json::from_str(r#"{"a": null, "list": ["x"]}"#)?;
/// assert_eq!(resolve(&doc, &Path::parse("a")), Resolution::Found(&Node::Null));
/// assert_eq!(resolve(&doc, &Path::parse("b")), Resolution::Missing);
/// assert_eq!(resolve(&doc, &Path::parse("list.0")).found(), Some(&Node::from("x")));
/// assert!(resolve(&doc, &Path::parse("list.1")).is_missing());
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn resolve<'a>(doc: &'a Node, path: &Path) -> Resolution<'a> {
    path.iter()
        .try_fold(doc, child)
        .into()
}

/// Returns the direct child of `node` addressed by `segment`, if any.
pub(crate) fn child<'a>(node: &'a Node, segment: &Segment) -> Option<&'a Node> {
    match (node, segment) {
        (Node::Object(map), Segment::Key(key)) => map.get(key),
        (Node::Array(items), Segment::Index(index)) => items.get(*index),
        _ => None,
    }
}
