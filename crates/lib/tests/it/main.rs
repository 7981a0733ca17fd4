/*! Integration tests for jsonprop.
 *
 * A single integration test binary, organised by area:
 * - document: resolve, mutate, cast and select composed on decoded documents
 * - action: complete runs against files in temporary workspaces
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jsonprop=info")),
        )
        .with_test_writer()
        .try_init();
}

mod document;
mod helpers;
