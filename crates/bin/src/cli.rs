//! CLI argument definitions for the jsonprop binary.
//!
//! Every flag can also be supplied through the environment variable a CI
//! runner sets for an action input of the same name.

use std::path::PathBuf;

use clap::Parser;
use jsonprop::{
    Selection,
    config::Config,
    constants::{
        DEFAULT_FILE, DEFAULT_OUTPUT_NAME, DEFAULT_WORKSPACE, OUTPUT_FILE_ENV, WORKSPACE_ENV,
    },
};

/// Read, write or delete a property of a JSON file
#[derive(Parser, Debug)]
#[command(name = "jsonprop")]
#[command(about = "jsonprop: read, write, cast and delete JSON properties by dotted path")]
#[command(version)]
pub struct Cli {
    /// Base directory the input and output files are relative to
    #[arg(long, default_value = DEFAULT_WORKSPACE, env = WORKSPACE_ENV)]
    pub workspace: PathBuf,

    /// JSON file to read
    #[arg(short, long, default_value = DEFAULT_FILE, env = "INPUT_FILE")]
    pub file: PathBuf,

    /// JSON file to write in write and delete modes (defaults to --file)
    #[arg(long, env = "INPUT_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Dotted property path, e.g. `version` or `contributors.0.name`
    #[arg(short, long, default_value = "", env = "INPUT_PROPERTY")]
    pub property: String,

    /// One of read, write, delete
    #[arg(short, long, default_value = "read", env = "INPUT_MODE")]
    pub mode: String,

    /// Value to store in write mode
    #[arg(long, default_value = "", env = "INPUT_VALUE")]
    pub value: String,

    /// How to cast --value: string, number, boolean or object
    #[arg(long, default_value = "string", env = "INPUT_VALUE_TYPE")]
    pub value_type: String,

    /// Value reported when the property is missing
    #[arg(long, default_value = "", env = "INPUT_FALLBACK")]
    pub fallback: String,

    /// Value reported instead of the property when --use-override is set
    #[arg(long, default_value = "", env = "INPUT_OVERRIDE_WITH")]
    pub override_with: String,

    /// Always report --override-with
    #[arg(long, env = "INPUT_USE_OVERRIDE")]
    pub use_override: bool,

    /// Do not log the operation summary
    #[arg(short, long, env = "INPUT_QUIET")]
    pub quiet: bool,

    /// Name of the reported output
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME, env = "INPUT_OUTPUT_NAME")]
    pub output_name: String,

    /// Append outputs to this file instead of printing them
    #[arg(long, env = OUTPUT_FILE_ENV)]
    pub github_output: Option<PathBuf>,
}

impl Cli {
    /// Builds the library configuration from the parsed arguments.
    pub fn to_config(&self) -> Config {
        let mut config = Config::new(self.property.clone())
            .with_workspace(&self.workspace)
            .with_file(&self.file)
            .with_mode(self.mode.clone())
            .with_value(self.value.clone())
            .with_value_type(self.value_type.clone())
            .with_selection(Selection {
                use_override: self.use_override,
                override_with: self.override_with.clone(),
                fallback: self.fallback.clone(),
            })
            .with_quiet(self.quiet)
            .with_output_name(self.output_name.clone());
        if let Some(output_file) = &self.output_file {
            config = config.with_output_file(output_file);
        }
        config
    }
}
