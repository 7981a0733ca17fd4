//! Operation configuration.
//!
//! [`Config`] carries the raw inputs of one run: which file, which property,
//! which mode, and the mode-specific options. Front ends fill it from flags or
//! environment variables; [`Config::validate`] rejects unusable input before
//! any file is read.

use std::{fmt, path::PathBuf, str::FromStr};

use thiserror::Error;

use crate::{
    constants::{DEFAULT_FILE, DEFAULT_OUTPUT_NAME, DEFAULT_WORKSPACE},
    select::Selection,
};

/// Configuration errors, raised before the document is touched.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Mode is not `read`, `write` or `delete`
    #[error("Invalid mode '{mode}': expected one of read, write, delete")]
    InvalidMode { mode: String },

    /// The property path is empty
    #[error("Property is not specified")]
    MissingProperty,
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}

/// What a run does with the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Report the value at the property
    #[default]
    Read,
    /// Cast a value and store it at the property
    Write,
    /// Remove the property
    Delete,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Read => "read",
            Mode::Write => "write",
            Mode::Delete => "delete",
        }
    }

    /// Returns `true` if the mode persists a document.
    pub fn writes(&self) -> bool {
        matches!(self, Mode::Write | Mode::Delete)
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Mode::Read),
            "write" => Ok(Mode::Write),
            "delete" => Ok(Mode::Delete),
            other => Err(ConfigError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs of a single run.
///
/// Built with [`Config::new`] and the `with_*` methods:
///
/// ```
/// use jsonprop::config::{Config, Mode};
///
/// let config = Config::new("version")
///     .with_workspace("/repo")
///     .with_mode("write")
///     .with_value("2.0.0");
/// assert_eq!(config.validate(), Ok(Mode::Write));
/// assert_eq!(config.input_path(), std::path::Path::new("/repo/package.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base directory that `file` and `output_file` are relative to
    pub workspace: PathBuf,
    /// Document to read
    pub file: PathBuf,
    /// Document to write; defaults to `file`
    pub output_file: Option<PathBuf>,
    /// Dotted property path
    pub property: String,
    /// Raw mode name, checked by [`Config::validate`]
    pub mode: String,
    /// Raw value to write
    pub value: String,
    /// Raw cast type name for `value`
    pub value_type: String,
    /// Read-mode override and fallback
    pub selection: Selection,
    /// Suppress the summary log line
    pub quiet: bool,
    /// Name under which the read value is reported
    pub output_name: String,
}

impl Config {
    /// Creates a read configuration for `property` with every other input at its default.
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            workspace: PathBuf::from(DEFAULT_WORKSPACE),
            file: PathBuf::from(DEFAULT_FILE),
            output_file: None,
            property: property.into(),
            mode: Mode::Read.as_str().to_string(),
            value: String::new(),
            value_type: "string".to_string(),
            selection: Selection::default(),
            quiet: false,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }

    pub fn with_workspace(mut self, workspace: impl Into<PathBuf>) -> Self {
        self.workspace = workspace.into();
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    pub fn with_output_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.output_file = Some(file.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = value_type.into();
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    /// Checks the mode and property, returning the parsed mode.
    pub fn validate(&self) -> Result<Mode, ConfigError> {
        let mode = self.mode.parse()?;
        if self.property.is_empty() {
            return Err(ConfigError::MissingProperty);
        }
        Ok(mode)
    }

    /// The document to read.
    pub fn input_path(&self) -> PathBuf {
        self.workspace.join(&self.file)
    }

    /// The document to write.
    pub fn output_path(&self) -> PathBuf {
        self.workspace
            .join(self.output_file.as_ref().unwrap_or(&self.file))
    }
}
