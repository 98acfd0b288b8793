//! Locating the wrapped tool's executable
//!
//! Resolution order: configured path, `RESAMPLE_*` environment override,
//! a copy bundled next to the shim's own executable, then PATH.

use crate::config::Config;
use crate::error::{ConfigError, ShimError};
use crate::tool::Tool;
use std::path::PathBuf;
use tracing::debug;

pub fn resolve(tool: Tool, config: &Config) -> Result<PathBuf, ShimError> {
    if let Some(path) = config.paths.for_tool(tool) {
        if !path.exists() {
            return Err(ConfigError::InvalidValue(format!(
                "configured path for {} does not exist: {}",
                tool,
                path.display()
            ))
            .into());
        }
        debug!("using configured {} at {}", tool, path.display());
        return Ok(path.to_path_buf());
    }

    if let Some(path) = env_override(tool)? {
        debug!("using {} from {}", tool, tool.env_override());
        return Ok(path);
    }

    if let Some(path) = bundled(tool) {
        debug!("using bundled {} at {}", tool, path.display());
        return Ok(path);
    }

    which::which(tool.binary_name()).map_err(|_| ShimError::ToolNotFound { tool })
}

fn env_override(tool: Tool) -> Result<Option<PathBuf>, ShimError> {
    let Some(value) = std::env::var_os(tool.env_override()) else {
        return Ok(None);
    };
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(ConfigError::InvalidValue(format!(
            "{} points to a missing file: {}",
            tool.env_override(),
            path.display()
        ))
        .into());
    }
    Ok(Some(path))
}

/// The app's bundle places each tool next to its wrapper binary.
fn bundled(tool: Tool) -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe
        .parent()?
        .join(format!("{}{}", tool.binary_name(), std::env::consts::EXE_SUFFIX));
    candidate.exists().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn fake_tool(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        path
    }

    #[test]
    fn test_configured_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_tool(dir.path(), "yt-dlp");

        let mut config = Config::default();
        config.paths.yt_dlp = Some(path.clone());

        assert_eq!(resolve(Tool::YtDlp, &config).unwrap(), path);
    }

    #[test]
    fn test_missing_configured_path_is_rejected() {
        let mut config = Config::default();
        config.paths.yt_dlp = Some(PathBuf::from("/nonexistent/yt-dlp"));

        let err = resolve(Tool::YtDlp, &config).unwrap_err();
        assert!(matches!(
            err,
            ShimError::Config(ConfigError::InvalidValue(_))
        ));
        assert!(err.to_string().contains("/nonexistent/yt-dlp"));
    }

    #[test]
    fn test_env_override_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_tool(dir.path(), "audio-separator");

        // No other test touches this variable.
        env::set_var("RESAMPLE_AUDIO_SEPARATOR", &path);
        let resolved = resolve(Tool::AudioSeparator, &Config::default());
        env::remove_var("RESAMPLE_AUDIO_SEPARATOR");

        assert_eq!(resolved.unwrap(), path);
    }

    #[test]
    fn test_unresolved_tool_reports_not_found() {
        let saved = env::var_os("PATH");
        env::set_var("PATH", "");
        let err = resolve(Tool::YtDlp, &Config::default()).unwrap_err();
        if let Some(saved) = saved {
            env::set_var("PATH", saved);
        }

        assert!(matches!(err, ShimError::ToolNotFound { tool: Tool::YtDlp }));
        assert!(err.to_string().contains("yt-dlp"));
    }
}
