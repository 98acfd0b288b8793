//! Error types for sidecar-core

use crate::tool::Tool;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShimError>;

#[derive(Error, Debug)]
pub enum ShimError {
    #[error("{} not found. {}", .tool.binary_name(), .tool.install_hint())]
    ToolNotFound { tool: Tool },

    #[error("interrupted")]
    Interrupted,

    #[error("failed to launch {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
