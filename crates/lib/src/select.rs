//! Read-mode output selection.
//!
//! Turns a [`Resolution`] into the single string reported to the caller.

use crate::resolve::Resolution;

/// Override and fallback settings for [`select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Report `override_with` unconditionally
    pub use_override: bool,
    pub override_with: String,
    /// Reported when the path is missing
    pub fallback: String,
}

impl Selection {
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Enables the override and sets its value.
    pub fn with_override(mut self, value: impl Into<String>) -> Self {
        self.use_override = true;
        self.override_with = value.into();
        self
    }
}

/// Chooses the output string for a read.
///
/// In order of precedence:
/// 1. the override, when enabled, whether or not the path resolved;
/// 2. the fallback, when the path is missing;
/// 3. compact JSON, for objects and arrays;
/// 4. the scalar's canonical form otherwise. A found `false`, `0`, `""` or
///    `null` is reported as such and never replaced by the fallback.
///
/// ```
/// use jsonprop::{Node, Resolution, Selection, select};
///
/// let fallback = Selection::default().with_fallback("none");
/// assert_eq!(select(Resolution::Missing, &fallback), "none");
/// assert_eq!(select(Resolution::Found(&Node::from(false)), &fallback), "false");
/// ```
pub fn select(resolution: Resolution<'_>, selection: &Selection) -> String {
    if selection.use_override {
        return selection.override_with.clone();
    }
    match resolution {
        Resolution::Missing => selection.fallback.clone(),
        Resolution::Found(node) if node.is_container() => node.to_json_string(),
        Resolution::Found(scalar) => scalar.to_string(),
    }
}
