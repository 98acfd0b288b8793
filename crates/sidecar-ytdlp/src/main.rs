//! Forwarding shim for the bundled yt-dlp downloader
//!
//! Hands the full argument vector to yt-dlp and echoes its exit code.
//! Interruption and any shim-side failure are reported on stdout and exit
//! with status 1, matching what the host app expects from the download
//! sidecar.

use sidecar_core::{exit_code, locate, logging, Config, Forwarder, ShimError, Tool};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let code = match run().await {
        Ok(code) => code,
        Err(ShimError::Interrupted) => {
            println!("\nDownload interrupted by user");
            1
        }
        Err(err) => {
            println!("Error: {err}");
            1
        }
    };

    std::process::exit(code);
}

async fn run() -> Result<i32, ShimError> {
    let config = Config::load(None)?;
    let yt_dlp = locate::resolve(Tool::YtDlp, &config)?;

    let forwarder = Forwarder::new(yt_dlp);
    let status = forwarder
        .run_interruptible(std::env::args_os().skip(1))
        .await?;

    Ok(exit_code(status))
}
