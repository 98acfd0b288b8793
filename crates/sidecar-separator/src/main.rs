//! Forwarding shim for the bundled audio-separator CLI
//!
//! Hands the full argument vector to audio-separator and exits with
//! whatever status it returns. Unlike the download shim, failures here are
//! not dressed up; setup errors simply propagate.

use anyhow::Result;
use sidecar_core::{exit_code, locate, logging, Config, Forwarder, Tool};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::load(None)?;
    let separator = locate::resolve(Tool::AudioSeparator, &config)?;

    let status = Forwarder::new(separator)
        .run(std::env::args_os().skip(1))
        .await?;

    std::process::exit(exit_code(status));
}
