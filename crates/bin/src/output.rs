//! Emission of named outputs.
//!
//! Outputs go to stdout as `name=value` lines, or, when a runner outputs file
//! is configured, are appended to it in the delimited multi-line form that
//! tolerates newlines in the value.

use std::{fs::OpenOptions, io::Write, path::Path};

use jsonprop::{action::Output, constants::OUTPUT_DELIMITER_PREFIX};
use uuid::Uuid;

/// Writes `output` to the runner outputs file, or to stdout if there is none.
pub fn emit(output: &Output, outputs_file: Option<&Path>) -> std::io::Result<()> {
    match outputs_file {
        Some(path) => {
            let delimiter = format!("{OUTPUT_DELIMITER_PREFIX}{}", Uuid::new_v4());
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(delimited(output, &delimiter).as_bytes())
        }
        None => {
            println!("{}={}", output.name, output.value);
            Ok(())
        }
    }
}

/// Formats an output as a heredoc-style entry ending in a newline.
pub fn delimited(output: &Output, delimiter: &str) -> String {
    format!(
        "{name}<<{delimiter}\n{value}\n{delimiter}\n",
        name = output.name,
        value = output.value
    )
}
