use std::path::Path;

use anyhow::Result;

/// Work time pre-filled in the prompt when nothing is configured.
pub const DEFAULT_DURATION: &str = "1d";

#[derive(Debug, Clone)]
pub struct Config {
    /// Value the work time prompt starts with.
    pub default_duration: String,
}

impl Config {
    /// Load config from the git config visible from `path`.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let output = std::process::Command::new("git")
            .current_dir(path)
            .args(["config", "--get", "jtime.defaultDuration"])
            .output()?;

        // Exit status 1 means the key is not set
        let default_duration = if output.status.success() {
            String::from_utf8(output.stdout)?.trim().to_string()
        } else {
            DEFAULT_DURATION.to_string()
        };

        Ok(Self { default_duration })
    }

    /// Create a new config with explicit values (useful for tests)
    pub fn new(default_duration: String) -> Self {
        Self { default_duration }
    }

    /// Default config for tests
    pub fn default_for_tests() -> Self {
        Self {
            default_duration: DEFAULT_DURATION.to_string(),
        }
    }
}
