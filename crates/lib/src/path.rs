//! Dotted property paths.
//!
//! A property string such as `"scripts.build"` or `"files.0"` is split on `.`
//! into [`Segment`]s. Each segment is classified once, from its text alone:
//! canonical non-negative decimal integers up to [`MAX_INDEX`] are array
//! indices, everything else is an object key. The same string therefore
//! always yields the same segment kinds, whatever the shape of the document it
//! is later applied to.
//!
//! # Usage
//!
//! ```rust
//! use jsonprop::path::{Path, Segment};
//!
//! let path = Path::parse("contributors.0.name");
//! assert_eq!(
//!     path.segments(),
//!     &[Segment::key("contributors"), Segment::Index(0), Segment::key("name")]
//! );
//!
//! // Leading zeros keep a segment a key
//! assert_eq!(Path::parse("007").segments(), &[Segment::key("007")]);
//! ```
//!
//! Splitting does not normalise: `"a..b"` has an empty key segment in the
//! middle and `""` parses to a single empty key. Callers that treat an empty
//! property as an error must check before parsing.

use std::{convert::Infallible, fmt, str::FromStr};

/// A single component of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object member name
    Key(String),
    /// Array position
    Index(usize),
}

impl Segment {
    /// Classifies one `.`-delimited token.
    ///
    /// ```
    /// # use jsonprop::path::Segment;
    /// assert_eq!(Segment::parse("0"), Segment::Index(0));
    /// assert_eq!(Segment::parse("12"), Segment::Index(12));
    /// assert_eq!(Segment::parse("01"), Segment::key("01"));
    /// assert_eq!(Segment::parse("-1"), Segment::key("-1"));
    /// assert_eq!(Segment::parse("+1"), Segment::key("+1"));
    /// assert_eq!(Segment::parse(""), Segment::key(""));
    /// ```
    pub fn parse(token: &str) -> Self {
        match parse_index(token) {
            Some(index) => Segment::Index(index),
            None => Segment::Key(token.to_string()),
        }
    }

    /// Creates a key segment without classifying it.
    pub fn key(key: impl Into<String>) -> Self {
        Segment::Key(key.into())
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Segment::Key(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(key) => Some(key.as_str()),
            Segment::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Key(_) => None,
            Segment::Index(index) => Some(*index),
        }
    }
}

/// Largest value a parsed token is classified as an index; larger numbers are keys.
pub const MAX_INDEX: usize = u32::MAX as usize - 1;

/// Digits only, no sign, no leading zero unless the token is exactly `"0"`,
/// and at most [`MAX_INDEX`].
fn parse_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    token.parse().ok().filter(|index| *index <= MAX_INDEX)
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(token: &str) -> Self {
        Segment::parse(token)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// An ordered sequence of [`Segment`]s addressing a node inside a document.
///
/// The empty path addresses the document root. It can only be built
/// programmatically; [`Path::parse`] always yields at least one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Splits a property string on `.` and classifies each token.
    pub fn parse(property: &str) -> Self {
        Self {
            segments: property.split('.').map(Segment::parse).collect(),
        }
    }

    /// Creates a path from already classified segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Appends a segment, builder style.
    pub fn push(mut self, segment: impl Into<Segment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if this is the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the last segment, or `None` for the root path.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns the path without its last segment, or `None` for the root path.
    pub fn parent(&self) -> Option<Path> {
        let (_, parent) = self.segments.split_last()?;
        Some(Path::from_segments(parent.to_vec()))
    }

    /// Iterates over the segments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(property: &str) -> Self {
        Self::parse(property)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self::from_segments(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Constructs a [`Path`].
///
/// - `path!()` - the root path
/// - `path!("a.b.0")` - parses a dotted property string
/// - `path!("list", 0, name)` - one segment per argument; each argument is
///   formatted with `Display` and classified like a dotted token, but is
///   never split, so keys containing dots stay whole
///
/// ```rust
/// # use jsonprop::path;
/// # use jsonprop::path::Segment;
/// let base = "dependencies";
/// let p = path!(base, "serde.json", 0);
/// assert_eq!(
///     p.segments(),
///     &[Segment::key("dependencies"), Segment::key("serde.json"), Segment::Index(0)]
/// );
/// assert_eq!(path!("a.b"), path!("a", "b"));
/// assert!(path!().is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::Path::root()
    };

    ($single:literal) => {
        $crate::path::Path::parse(&$single.to_string())
    };

    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        $crate::path::Path::root()
            .push($crate::path::Segment::parse(&$first.to_string()))
            $(.push($crate::path::Segment::parse(&$rest.to_string())))+
    }};
}
