//! Configuration for the sidecar binaries
//!
//! The shims parse no flags of their own, so a config file and the
//! `RESAMPLE_*` environment overrides are the only knobs.

use crate::error::ConfigError;
use crate::tool::Tool;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to the yt-dlp executable (auto-detected if not set)
    pub yt_dlp: Option<PathBuf>,
    /// Path to the audio-separator executable (auto-detected if not set)
    pub audio_separator: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the user config directory and an optional
    /// explicit file.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(config_dir) = dirs::config_dir() {
            let default_config = config_dir.join("resample/sidecars.toml");
            if default_config.exists() {
                figment = figment.merge(Toml::file(&default_config));
            }
        }

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .extract()
            .map_err(|e| ConfigError::LoadError(e.to_string()))
    }
}

impl PathsConfig {
    pub fn for_tool(&self, tool: Tool) -> Option<&Path> {
        match tool {
            Tool::YtDlp => self.yt_dlp.as_deref(),
            Tool::AudioSeparator => self.audio_separator.as_deref(),
        }
    }
}
