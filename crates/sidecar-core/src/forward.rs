//! Argument forwarding to the wrapped tool
//!
//! The wrapped executable receives the argument vector exactly as given
//! and inherits the shim's stdio, so its output and prompts pass through
//! untouched.

use crate::error::ShimError;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;
use tokio::process::{Child, Command};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Forwarder {
    program: PathBuf,
}

impl Forwarder {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Run the wrapped tool to completion.
    pub async fn run<I, S>(&self, args: I) -> Result<ExitStatus, ShimError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut child = self.spawn(args)?;
        child.wait().await.map_err(ShimError::Io)
    }

    /// Run the wrapped tool, racing it against Ctrl-C delivery.
    ///
    /// On interrupt the child is killed and reaped before
    /// [`ShimError::Interrupted`] is returned.
    pub async fn run_interruptible<I, S>(&self, args: I) -> Result<ExitStatus, ShimError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut child = self.spawn(args)?;

        let interrupted = tokio::select! {
            status = child.wait() => return status.map_err(ShimError::Io),
            res = tokio::signal::ctrl_c() => res.is_ok(),
        };

        if !interrupted {
            // Signal listener could not be installed; fall back to waiting.
            warn!("could not listen for Ctrl-C");
            return child.wait().await.map_err(ShimError::Io);
        }

        let _ = child.start_kill();
        let _ = child.wait().await;
        Err(ShimError::Interrupted)
    }

    fn spawn<I, S>(&self, args: I) -> Result<Child, ShimError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        debug!("launching {}", self.program.display());
        Command::new(&self.program)
            .args(args)
            .spawn()
            .map_err(|source| ShimError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

/// Map an exit status to the shim's own exit code.
///
/// A child killed by a signal has no code; on Unix that becomes the
/// conventional `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
