//! Defaults shared by the library and the command-line front end.

/// Document read when no file is configured.
pub const DEFAULT_FILE: &str = "package.json";

/// Base directory when no workspace is configured.
pub const DEFAULT_WORKSPACE: &str = "./";

/// Name under which a read value is reported.
pub const DEFAULT_OUTPUT_NAME: &str = "value";

/// Environment variable naming the workspace directory on CI runners.
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// Environment variable naming the file that collects step outputs.
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Prefix of the heredoc delimiter used when appending to the outputs file.
pub const OUTPUT_DELIMITER_PREFIX: &str = "ghadelimiter_";
