//! The wrapped tools and their lookup metadata

/// A tool wrapped by one of the sidecar binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    YtDlp,
    AudioSeparator,
}

impl Tool {
    /// Executable name looked up on PATH and in the bundle directory.
    pub fn binary_name(self) -> &'static str {
        match self {
            Tool::YtDlp => "yt-dlp",
            Tool::AudioSeparator => "audio-separator",
        }
    }

    /// Environment variable that pins an explicit executable path.
    pub fn env_override(self) -> &'static str {
        match self {
            Tool::YtDlp => "RESAMPLE_YT_DLP",
            Tool::AudioSeparator => "RESAMPLE_AUDIO_SEPARATOR",
        }
    }

    pub fn install_hint(self) -> &'static str {
        match self {
            Tool::YtDlp => "Install with: brew install yt-dlp",
            Tool::AudioSeparator => "Install with: pipx install audio-separator",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.binary_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_metadata() {
        assert_eq!(Tool::YtDlp.binary_name(), "yt-dlp");
        assert_eq!(Tool::AudioSeparator.binary_name(), "audio-separator");
        assert_eq!(Tool::YtDlp.env_override(), "RESAMPLE_YT_DLP");
        assert_eq!(Tool::AudioSeparator.env_override(), "RESAMPLE_AUDIO_SEPARATOR");
        assert_eq!(Tool::AudioSeparator.to_string(), "audio-separator");
    }
}
