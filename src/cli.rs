//! Turning command line arguments into an [`App`].

use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::App;
use crate::Config;
use crate::config::DEFAULT_DURATION;
use crate::ops::git::RealGit;
use crate::ops::prompt::DialoguerPrompt;
use crate::ops::prompt::FixedPrompt;
use crate::ops::prompt::PromptOps;
use crate::ops::prompt::PromptRequest;

/// Which repositories a command looks at.
#[derive(Args, Clone, Debug, Default)]
pub struct Target {
    /// Directories to look for repositories in (defaults to the current directory)
    #[arg(short, long = "repo")]
    pub repos: Vec<PathBuf>,
    /// Root of the repository to use when several are found
    #[arg(short, long)]
    pub context: Option<PathBuf>,
}

impl Target {
    /// Directories searched for repositories; `cwd` when none were given.
    pub fn search_paths(&self, cwd: &Path) -> Vec<PathBuf> {
        if self.repos.is_empty() {
            vec![cwd.to_path_buf()]
        } else {
            self.repos.clone()
        }
    }

    /// The `--context` path with symlinks resolved.
    ///
    /// A path that can't be resolved is returned as given, so it fails the
    /// repository lookup like any other unknown root.
    pub fn context_root(&self) -> Option<PathBuf> {
        let context = self.context.as_deref()?;
        match std::fs::canonicalize(context) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("Failed to resolve {}: {}", context.display(), e);
                Some(context.to_path_buf())
            }
        }
    }
}

/// Prompt chosen from the command line: `--time` answers up front,
/// otherwise the user is asked in the terminal.
pub enum CliPrompt {
    Fixed(FixedPrompt),
    Interactive(DialoguerPrompt),
}

impl CliPrompt {
    pub fn from_time(time: Option<String>) -> Self {
        match time {
            Some(time) => Self::Fixed(FixedPrompt(Some(time))),
            None => Self::Interactive(DialoguerPrompt),
        }
    }
}

impl PromptOps for CliPrompt {
    async fn input(&self, request: &PromptRequest) -> Result<Option<String>> {
        match self {
            Self::Fixed(prompt) => prompt.input(request).await,
            Self::Interactive(prompt) => prompt.input(request).await,
        }
    }
}

impl App<RealGit, CliPrompt> {
    /// Build the app for `target`, with relative defaults taken from `cwd`.
    ///
    /// Config is read from the first search path and falls back to the
    /// defaults when git can't be asked there.
    pub fn from_target(target: &Target, cwd: &Path, time: Option<String>) -> Self {
        let search_paths = target.search_paths(cwd);
        let config = Config::load(&search_paths[0]).unwrap_or_else(|e| {
            debug!("Using default config: {:#}", e);
            Config::new(DEFAULT_DURATION.to_string())
        });
        App::new(config, RealGit::new(search_paths), CliPrompt::from_time(time))
    }
}
