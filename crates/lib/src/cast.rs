//! Conversion of raw configuration strings into typed nodes.
//!
//! Values arrive as strings (command-line flags, environment variables) along
//! with a declared [`CastTag`]. [`cast`] turns the pair into the [`Node`] that
//! gets written into the document, or fails; it never guesses a type.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::node::{Node, Number};

/// Errors produced while casting a raw string.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CastError {
    /// The declared type name is not one of `string`, `number`, `boolean`, `object`
    #[error("unknown cast type: '{name}'")]
    UnknownType { name: String },

    /// The raw value is not a finite decimal number
    #[error("cannot cast '{raw}' to number")]
    InvalidNumber { raw: String },

    /// The raw value is neither `true` nor `false`
    #[error("cannot cast '{raw}' to boolean: expected 'true' or 'false'")]
    InvalidBoolean { raw: String },

    /// The raw value is not valid JSON
    #[error("cannot cast value to object: {reason}")]
    InvalidJson { reason: String },
}

impl CastError {
    /// Check if this error comes from an unrecognised type name
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, CastError::UnknownType { .. })
    }

    /// Get the rejected raw value, when the error carries one
    pub fn raw(&self) -> Option<&str> {
        match self {
            CastError::InvalidNumber { raw } | CastError::InvalidBoolean { raw } => {
                Some(raw.as_str())
            }
            _ => None,
        }
    }
}

impl From<CastError> for crate::Error {
    fn from(err: CastError) -> Self {
        crate::Error::Cast(err)
    }
}

/// Target type for [`cast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CastTag {
    /// Keep the raw string
    #[default]
    String,
    /// Decimal integer or floating point number
    Number,
    /// `true` or `false`
    Boolean,
    /// Any JSON text, embedded as a subtree
    Object,
}

impl CastTag {
    /// All tags, in declaration order.
    pub const ALL: [CastTag; 4] = [
        CastTag::String,
        CastTag::Number,
        CastTag::Boolean,
        CastTag::Object,
    ];

    /// The lowercase name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            CastTag::String => "string",
            CastTag::Number => "number",
            CastTag::Boolean => "boolean",
            CastTag::Object => "object",
        }
    }
}

impl FromStr for CastTag {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CastTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| CastError::UnknownType {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for CastTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts `raw` into a node of the type selected by `tag`.
///
/// ```
/// use jsonprop::{CastTag, Node, cast};
///
/// assert_eq!(cast("5", CastTag::Number)?, Node::from(5));
/// assert_eq!(cast("false", CastTag::Boolean)?, Node::from(false));
/// assert_eq!(cast("false", CastTag::String)?, Node::from("false"));
/// assert!(cast("abc", CastTag::Number).is_err());
/// assert!(cast("yes", CastTag::Boolean).is_err());
/// # Ok::<(), jsonprop::cast::CastError>(())
/// ```
pub fn cast(raw: &str, tag: CastTag) -> Result<Node, CastError> {
    match tag {
        CastTag::String => Ok(Node::Text(raw.to_string())),
        CastTag::Number => parse_number(raw)
            .map(Node::Number)
            .ok_or_else(|| CastError::InvalidNumber {
                raw: raw.to_string(),
            }),
        CastTag::Boolean => match raw {
            "true" => Ok(Node::Bool(true)),
            "false" => Ok(Node::Bool(false)),
            _ => Err(CastError::InvalidBoolean {
                raw: raw.to_string(),
            }),
        },
        CastTag::Object => serde_json::from_str(raw).map_err(|e| CastError::InvalidJson {
            reason: e.to_string(),
        }),
    }
}

/// Parses the type name and casts in one step.
///
/// ```
/// # use jsonprop::cast::{CastError, cast_as};
/// assert!(matches!(cast_as("1", "integer"), Err(CastError::UnknownType { .. })));
/// ```
pub fn cast_as(raw: &str, tag: &str) -> Result<Node, CastError> {
    cast(raw, tag.parse()?)
}

/// Integral values that fit in `i64` are stored as integers, so `"5"` and
/// `"5.0"` encode identically.
fn parse_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(int.into());
    }
    if let Ok(uint) = trimmed.parse::<u64>() {
        return Some(uint.into());
    }
    let float = trimmed.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        return Some((float as i64).into());
    }
    Number::from_f64(float)
}
