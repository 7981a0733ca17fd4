//! One complete run: load a document, apply the configured operation, persist.
//!
//! This is the only part of the crate that performs I/O. It follows a
//! fail-stop policy: a document that cannot be read or decoded is replaced by
//! an empty object and the failure is recorded on the [`Outcome`], while cast,
//! encode and write failures abort the run. Nothing is retried.

use std::{
    fs,
    path::{Path as FsPath, PathBuf},
};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::{
    Result,
    cast::{CastTag, cast},
    config::{Config, Mode},
    mutate::{Edit, mutate},
    node::Node,
    path::Path,
    resolve::resolve,
    select::select,
};

/// Why a document could not be loaded.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read
    #[error(transparent)]
    Read(#[from] std::io::Error),

    /// The text is not valid JSON
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),

    /// The text is valid JSON but its root is a scalar
    #[error("document root must be an object or array, found {found}")]
    ScalarRoot { found: &'static str },
}

/// Errors from reading, decoding, encoding or writing documents.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ActionError {
    /// The input file is unreadable, not JSON, or not an object or array
    #[error("Invalid JSON file: {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// The resulting document could not be encoded
    #[error("Failed to encode document for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The resulting document could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ActionError {
    /// Check if the run continued past this error with an empty document
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ActionError::Decode { .. })
    }

    /// Get the file this error concerns
    pub fn path(&self) -> &FsPath {
        match self {
            ActionError::Decode { path, .. }
            | ActionError::Encode { path, .. }
            | ActionError::Write { path, .. } => path,
        }
    }
}

impl From<ActionError> for crate::Error {
    fn from(err: ActionError) -> Self {
        crate::Error::Action(err)
    }
}

/// A named value reported by a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub name: String,
    pub value: String,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct Outcome {
    pub mode: Mode,
    /// The value to report; set for reads only
    pub output: Option<Output>,
    /// The file written; set for writes and deletes
    pub written: Option<PathBuf>,
    /// The document as it stands after the run
    pub document: Node,
    /// Errors the run recovered from
    pub failures: Vec<ActionError>,
}

impl Outcome {
    /// Returns `true` if the run finished without recovered failures.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// What a validated configuration asks for, with the write value already cast.
enum Operation {
    Read,
    Write(Node),
    Delete,
}

/// Executes the run described by `config`.
///
/// Configuration, the cast type and the value are all checked before the
/// input file is read, so those errors leave every file untouched.
pub fn run(config: &Config) -> Result<Outcome> {
    let mode = config.validate()?;
    let path = Path::parse(&config.property);
    let operation = match mode {
        Mode::Read => Operation::Read,
        Mode::Write => {
            let tag: CastTag = config.value_type.parse()?;
            Operation::Write(cast(&config.value, tag)?)
        }
        Mode::Delete => Operation::Delete,
    };

    let input = config.input_path();
    debug!(file = %input.display(), %path, %mode, "starting run");

    let mut failures = Vec::new();
    let document = match load_document(&input) {
        Ok(document) => document,
        Err(err) => {
            error!(error = %err, "continuing with an empty document");
            failures.push(err);
            Node::empty_object()
        }
    };

    let edit = match operation {
        Operation::Read => {
            let resolution = resolve(&document, &path);
            let value = select(resolution, &config.selection);
            if !config.quiet {
                info!(
                    file = %input.display(),
                    property = %config.property,
                    found = resolution.is_found(),
                    value = %value,
                    "read property"
                );
            }
            return Ok(Outcome {
                mode,
                output: Some(Output {
                    name: config.output_name.clone(),
                    value,
                }),
                written: None,
                document,
                failures,
            });
        }
        Operation::Write(value) => Edit::Set(value),
        Operation::Delete => Edit::Delete,
    };

    let document = mutate(&document, &path, edit)?;
    let target = config.output_path();
    save_document(&target, &document)?;
    if !config.quiet {
        info!(
            file = %target.display(),
            property = %config.property,
            %mode,
            value = %config.value,
            value_type = %config.value_type,
            "updated property"
        );
    }

    Ok(Outcome {
        mode,
        output: None,
        written: Some(target),
        document,
        failures,
    })
}

/// Decodes JSON text into a document.
///
/// Only objects and arrays are accepted as document roots.
pub fn decode(text: &str) -> std::result::Result<Node, DecodeError> {
    let node: Node = serde_json::from_str(text)?;
    if node.is_container() {
        Ok(node)
    } else {
        Err(DecodeError::ScalarRoot {
            found: node.type_name(),
        })
    }
}

/// Encodes a document as pretty-printed JSON with two-space indentation.
pub fn encode(document: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}

/// Reads and decodes the document at `path`.
pub fn load_document(path: &FsPath) -> std::result::Result<Node, ActionError> {
    fs::read_to_string(path)
        .map_err(DecodeError::from)
        .and_then(|text| decode(&text))
        .map_err(|source| ActionError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Encodes `document` and writes it to `path`, replacing any existing file.
pub fn save_document(path: &FsPath, document: &Node) -> std::result::Result<(), ActionError> {
    let text = encode(document).map_err(|source| ActionError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| ActionError::Write {
        path: path.to_path_buf(),
        source,
    })
}
