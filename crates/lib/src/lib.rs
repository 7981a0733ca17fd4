//!
//! jsonprop: read, write, cast and delete values inside JSON documents by
//! dotted property path.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: A decoded document. Objects and arrays are reference counted so derived documents share untouched subtrees.
//! * **Paths (`path::Path`)**: A property string such as `"scripts.build"` split into key and index segments.
//! * **Resolver (`resolve::resolve`)**: Looks a path up, distinguishing a missing path from a `null` value.
//! * **Mutator (`mutate::mutate`)**: Returns a copy of a document with a path set or deleted, creating missing containers on the way.
//! * **Caster (`cast::cast`)**: Turns a raw string and a declared type into a node.
//! * **Selection (`select::select`)**: Picks the string reported by a read, honouring override and fallback settings.
//! * **Runs (`action::run`)**: Loads a file, applies one configured operation and persists the result.
//!
//! The first five are pure and never fail on missing data. Only `action`
//! performs I/O.
//!
//! ```
//! use jsonprop::{CastTag, Edit, Node, Path, Resolution, cast, mutate, resolve};
//!
//! let doc: Node = serde_json::from_str("{}")?;
//! let path = Path::parse("a.b");
//! let updated = mutate(&doc, &path, Edit::Set(cast("5", CastTag::Number)?))?;
//!
//! assert_eq!(updated.to_json_string(), r#"{"a":{"b":5}}"#);
//! assert_eq!(resolve(&updated, &path), Resolution::Found(&Node::from(5)));
//! assert_eq!(resolve(&doc, &path), Resolution::Missing);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod action;
pub mod cast;
pub mod config;
pub mod constants;
pub mod mutate;
pub mod node;
pub mod path;
pub mod resolve;
pub mod select;

pub use cast::{CastError, CastTag, cast};
pub use mutate::{Edit, MutateError, mutate};
pub use node::{Map, Node};
pub use path::{Path, Segment};
pub use resolve::{Resolution, resolve};
pub use select::{Selection, select};

/// Result type used throughout the jsonprop library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the jsonprop library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured cast errors from the cast module
    #[error(transparent)]
    Cast(cast::CastError),

    /// Structured mutation errors from the mutate module
    #[error(transparent)]
    Mutate(mutate::MutateError),

    /// Structured configuration errors from the config module
    #[error(transparent)]
    Config(config::ConfigError),

    /// Structured file errors from the action module
    #[error(transparent)]
    Action(action::ActionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Cast(_) => "cast",
            Error::Mutate(_) => "mutate",
            Error::Config(_) => "config",
            Error::Action(_) => "action",
        }
    }

    /// Check if this error was raised before any file was read.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Cast(_))
    }

    /// Check if this error is a cast failure.
    pub fn is_cast_error(&self) -> bool {
        matches!(self, Error::Cast(_))
    }

    /// Check if this error was raised while applying an edit.
    pub fn is_mutate_error(&self) -> bool {
        matches!(self, Error::Mutate(_))
    }

    /// Check if this error is file related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Action(_))
    }
}
